//! 指令目录：数据模型、内置树、合并重建、按码查找

pub mod defaults;
pub mod lookup;
pub mod merge;
pub mod types;

pub use defaults::{default_groups, LANGUAGES, TONES};
pub use lookup::find_by_code;
pub use merge::refresh;
pub use types::{Category, Group, InstructionItem};

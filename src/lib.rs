//! Cue - 选中文本快捷指令目录系统
//!
//! 模块划分：
//! - **catalog**: 指令目录（数据模型、内置树、合并重建、按码查找）
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **error**: 目录操作错误
//! - **feature**: 快捷入口注册表抽象（宿主能力注入）
//! - **invoke**: 派发时的占位符填充
//! - **service**: 目录查询与编辑门面
//! - **store**: 自定义指令快照持久化
//! - **template**: 指令模板的两种字面形态

pub mod catalog;
pub mod config;
pub mod error;
pub mod feature;
pub mod invoke;
pub mod service;
pub mod store;
pub mod template;

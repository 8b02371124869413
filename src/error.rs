//! 目录操作错误
//!
//! 所有错误都局限于触发它的单次操作，目录在任何错误之后保持可查询状态。
//! 合并时分类缺失只记日志；查找时码重复按首个命中处理，两者都不是错误。

use thiserror::Error;

/// 自定义指令操作可能出现的错误
#[derive(Error, Debug)]
pub enum CatalogError {
    /// 同分类下已存在相同码的自定义指令（码取自用户输入的名称）
    #[error("分类 '{category}' 下已存在同名的自定义快捷指令: {code}")]
    DuplicateCodeInCategory { category: String, code: String },

    /// 表单字段去空格后为空；fields 列出所有未通过的字段
    #[error("必填字段为空: {}", .fields.join(", "))]
    ValidationFailed { fields: Vec<&'static str> },

    /// 快照持久化失败
    #[error("存储错误: {0}")]
    Store(#[from] anyhow::Error),
}

//! 指令模板渲染
//!
//! 两种字面模板形态：inline（单行，后接引号包裹的正文）与 block（指令行之后
//! 以三引号块包裹正文）。模板内嵌 {{language}} 与 {{text}} 占位符，由派发层
//! 在运行时替换（见 invoke 模块）。

/// 选中文本占位符
pub const TEXT_TOKEN: &str = "{{text}}";
/// 目标语言占位符
pub const LANGUAGE_TOKEN: &str = "{{language}}";
/// 提问内容占位符（预留）
pub const QUESTION_TOKEN: &str = "{{question}}";

/// 单行形态：`{role}. {instruct} in language '{{language}}': '''{{text}}'''`
pub fn inline_template(role: &str, instruct: &str) -> String {
    format!("{role}. {instruct} in language '{LANGUAGE_TOKEN}': '''{TEXT_TOKEN}'''")
}

/// 块形态：`{role}. {instruct} in language '{{language}}':` 后接三引号块
pub fn block_template(role: &str, instruct: &str) -> String {
    format!("{role}. {instruct} in language '{LANGUAGE_TOKEN}':\n\n'''\n{TEXT_TOKEN}\n'''")
}

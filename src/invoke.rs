//! 派发时的占位符填充
//!
//! 对模板中的 {{text}} / {{language}} / {{question}} 做字面替换。未提供的
//! 可选变量原样保留，三引号分隔符不做任何处理。

use crate::template::{LANGUAGE_TOKEN, QUESTION_TOKEN, TEXT_TOKEN};

/// 以运行时输入填充模板，返回最终指令串
pub fn fill_template(
    template: &str,
    text: &str,
    language: Option<&str>,
    question: Option<&str>,
) -> String {
    let mut filled = template.replace(TEXT_TOKEN, text);
    if let Some(language) = language {
        filled = filled.replace(LANGUAGE_TOKEN, language);
    }
    if let Some(question) = question {
        filled = filled.replace(QUESTION_TOKEN, question);
    }
    filled
}

//! 内置指令树
//!
//! 固定的三栏目录与两类生成项（翻译按语言展开、语调按语气展开）。
//! 生成子项的码派生为 `trans-{语言码}` / `tone-{语气值}`，重建之间保持稳定，
//! 快捷入口的匹配依赖这一点。

use crate::template::{block_template, inline_template, TEXT_TOKEN};

use super::types::{Category, Group, InstructionItem};

/// 支持的目标语言（码, 显示名）
pub const LANGUAGES: &[(&str, &str)] = &[
    ("zh-Hans", "简体中文"),
    ("zh-Hant", "繁體中文"),
    ("en", "English"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("ru", "Русский"),
];

/// 支持的语气（值, 显示名）
pub const TONES: &[(&str, &str)] = &[
    ("professional", "专业"),
    ("casual", "随意"),
    ("straightforward", "直接"),
    ("confident", "自信"),
    ("friendly", "友好"),
];

/// 翻译子项：目标语言名在构造时写死进模板
fn translation_children() -> Vec<InstructionItem> {
    LANGUAGES
        .iter()
        .map(|(code, name)| {
            InstructionItem::leaf(
                format!("trans-{code}"),
                (*name).to_string(),
                format!("👉 翻译-{name}"),
                format!(
                    "You are a professional translator. Translate following text to language '{name}':\n\n'''\n{TEXT_TOKEN}\n'''"
                ),
            )
        })
        .collect()
}

/// 语调子项：语气值写进指令，统一块模板
fn tone_children() -> Vec<InstructionItem> {
    TONES
        .iter()
        .map(|(value, name)| {
            InstructionItem::leaf(
                format!("tone-{value}"),
                (*name).to_string(),
                format!("👉 语调-{name}"),
                block_template(
                    "You are a professional copywriter",
                    &format!("Change tone of following text to more '{value}'"),
                ),
            )
        })
        .collect()
}

/// 构建默认目录树；每次调用生成全新对象，构建后视为不可变
pub fn default_groups() -> Vec<Group> {
    vec![
        Group {
            categories: vec![
                Category {
                    name: "生成类".to_string(),
                    items: vec![
                        InstructionItem::group("trans", "🌍 翻译", translation_children()),
                        InstructionItem::leaf(
                            "summarize",
                            "📚 总结",
                            "👉 总结",
                            block_template(
                                "You are a professional summarizer",
                                "Summarize following text",
                            ),
                        ),
                    ],
                },
                Category {
                    name: "写作类".to_string(),
                    items: vec![InstructionItem::leaf(
                        "continue",
                        "🖋 续写",
                        "👉 续写",
                        block_template(
                            "You are a professional copywriter",
                            "Continue writing following text",
                        ),
                    )],
                },
                Category {
                    name: "提问类".to_string(),
                    items: vec![InstructionItem::leaf(
                        "explain",
                        "🤔 解释",
                        "👉 解释",
                        block_template(
                            "You are a professional explainer",
                            "Explain following text",
                        ),
                    )],
                },
            ],
        },
        Group {
            categories: vec![Category {
                name: "编辑类".to_string(),
                items: vec![
                    InstructionItem::group("tone", "🎓 语调", tone_children()),
                    InstructionItem::leaf(
                        "improve",
                        "✍️ 改进表达",
                        "👉 改进表达",
                        block_template(
                            "You are a professional copywriter",
                            "Improve following text",
                        ),
                    ),
                    InstructionItem::leaf(
                        "fix",
                        "📝 修正语法",
                        "👉 修正语法",
                        block_template(
                            "You are a professional copywriter",
                            "Fix spelling & grammar of following text",
                        ),
                    ),
                    InstructionItem::leaf(
                        "shorten",
                        "📉 改短些",
                        "👉 改短些",
                        block_template(
                            "You are a professional copywriter",
                            "Make following text SHORTER",
                        ),
                    ),
                    InstructionItem::leaf(
                        "lengthen",
                        "📈 改长些",
                        "👉 改长些",
                        block_template(
                            "You are a professional copywriter",
                            "Make following text LONGER",
                        ),
                    ),
                    InstructionItem::leaf(
                        "simplify",
                        "🔄 简化",
                        "👉 简化",
                        block_template(
                            "You are a professional copywriter",
                            "Simplify language of following text",
                        ),
                    ),
                ],
            }],
        },
        Group {
            categories: vec![Category {
                name: "草稿类".to_string(),
                items: vec![
                    InstructionItem::leaf(
                        "brainstorm",
                        "💡 头脑风暴",
                        "👉 头脑风暴",
                        inline_template(
                            "You are a helpful assistant",
                            "Brainstorm ideas on following topic",
                        ),
                    ),
                    InstructionItem::leaf(
                        "blog",
                        "✍️ 写博客",
                        "👉 写博客",
                        inline_template(
                            "You are a professional copywriter",
                            "Write a blog post about following topic",
                        ),
                    ),
                    InstructionItem::leaf(
                        "outline",
                        "✍️ 写框架",
                        "👉 写框架",
                        inline_template(
                            "You are a professional copywriter",
                            "Write a outline about following topic",
                        ),
                    ),
                    InstructionItem::leaf(
                        "social",
                        "✍️ 写社交媒体文章",
                        "👉 写社交媒体文章",
                        inline_template(
                            "You are a professional copywriter",
                            "Write a social media post about following topic",
                        ),
                    ),
                    InstructionItem::leaf(
                        "todo",
                        "✍️ 写待办事项",
                        "👉 写待办事项",
                        inline_template(
                            "You are a professional copywriter",
                            "Write a To-do list about following topic",
                        ),
                    ),
                ],
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        let groups = default_groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].categories.len(), 3);
        assert_eq!(groups[1].categories.len(), 1);
        assert_eq!(groups[2].categories.len(), 1);

        let editing = &groups[1].categories[0];
        assert_eq!(editing.name, "编辑类");
        assert_eq!(editing.items.len(), 6);
    }

    #[test]
    fn test_translation_children_codes_are_stable() {
        let trans = &default_groups()[0].categories[0].items[0];
        assert!(trans.is_group());
        assert_eq!(trans.children.len(), LANGUAGES.len());

        let en = trans.children.iter().find(|c| c.code == "trans-en").unwrap();
        assert_eq!(en.name, "English");
        assert_eq!(en.feature_name.as_deref(), Some("👉 翻译-English"));
        assert!(en.prompt.as_deref().unwrap().contains("language 'English'"));
        assert!(en.prompt.as_deref().unwrap().contains("'''\n{{text}}\n'''"));
    }

    #[test]
    fn test_tone_children_use_block_template() {
        let tone = &default_groups()[1].categories[0].items[0];
        assert_eq!(tone.children.len(), TONES.len());

        let casual = tone.children.iter().find(|c| c.code == "tone-casual").unwrap();
        assert_eq!(casual.name, "随意");
        assert_eq!(casual.feature_name.as_deref(), Some("👉 语调-随意"));
        assert_eq!(
            casual.prompt.as_deref(),
            Some("You are a professional copywriter. Change tone of following text to more 'casual' in language '{{language}}':\n\n'''\n{{text}}\n'''")
        );
    }

    #[test]
    fn test_draft_items_use_inline_template() {
        let drafts = &default_groups()[2].categories[0];
        for item in &drafts.items {
            let prompt = item.prompt.as_deref().unwrap();
            assert!(prompt.ends_with("'''{{text}}'''"), "{}", item.code);
        }
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        assert_eq!(default_groups(), default_groups());
    }
}

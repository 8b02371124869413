//! 按码查找
//!
//! 先序深度优先遍历生效树。码在全树假定唯一；若被自定义项复用，首个命中
//! 生效（遍历顺序为分栏、分类、条目，子项紧随其父），内置项因此总是遮蔽
//! 复用其码的自定义项。

use super::types::{Group, InstructionItem};

/// 在整棵树中按码查找指令项，首个命中返回
pub fn find_by_code<'a>(groups: &'a [Group], code: &str) -> Option<&'a InstructionItem> {
    groups
        .iter()
        .flat_map(|group| &group.categories)
        .find_map(|category| find_in_items(&category.items, code))
}

fn find_in_items<'a>(items: &'a [InstructionItem], code: &str) -> Option<&'a InstructionItem> {
    for item in items {
        if item.code == code {
            return Some(item);
        }
        if let Some(found) = find_in_items(&item.children, code) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_groups;
    use crate::catalog::types::Category;

    #[test]
    fn test_find_top_level_and_nested() {
        let groups = default_groups();

        let trans = find_by_code(&groups, "trans").unwrap();
        assert!(trans.is_group());

        let en = find_by_code(&groups, "trans-en").unwrap();
        assert_eq!(en.name, "English");
        assert!(en.prompt.as_deref().unwrap().contains("'English'"));
    }

    #[test]
    fn test_missing_code_returns_none() {
        let groups = default_groups();
        assert!(find_by_code(&groups, "no-such-code").is_none());
    }

    #[test]
    fn test_duplicate_code_first_match_wins() {
        let groups = vec![Group {
            categories: vec![
                Category {
                    name: "甲".to_string(),
                    items: vec![InstructionItem::leaf("dup", "第一个", "第一个", "p1")],
                },
                Category {
                    name: "乙".to_string(),
                    items: vec![InstructionItem::leaf("dup", "第二个", "第二个", "p2")],
                },
            ],
        }];

        let found = find_by_code(&groups, "dup").unwrap();
        assert_eq!(found.name, "第一个");
    }
}

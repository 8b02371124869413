//! 目录合并
//!
//! 每次刷新都从不可变的默认树整体重建，绝不增量修补，删除自定义项后不会有
//! 旧数据残留；相同快照重复刷新产出结构相等的树。

use tracing::warn;

use crate::store::{CustomEntry, CustomSnapshot};
use crate::template::block_template;

use super::types::{Group, InstructionItem};

/// 由默认树与自定义快照生成全新的生效树
///
/// 自定义项按快照顺序追加到所有同名分类末尾（分类名正常情况下全树唯一，
/// 算法不依赖这一点）；找不到分类的自定义项丢弃并记日志，分类名是由内置树
/// 控制的闭集，残留数据不构成错误。
pub fn refresh(defaults: &[Group], snapshot: &CustomSnapshot) -> Vec<Group> {
    let mut groups = defaults.to_vec();

    for (category_name, entries) in snapshot {
        let mut matched = false;
        for group in &mut groups {
            for category in &mut group.categories {
                if category.name == *category_name {
                    matched = true;
                    category.items.extend(entries.values().map(custom_item));
                }
            }
        }
        if !matched {
            warn!(category = %category_name, "自定义指令的分类不在内置目录中，跳过");
        }
    }

    groups
}

/// 由用户表单字段构建自定义指令项，统一使用块模板
fn custom_item(entry: &CustomEntry) -> InstructionItem {
    InstructionItem {
        code: entry.code.clone(),
        name: entry.name.clone(),
        feature_name: Some(entry.name.clone()),
        prompt: Some(block_template(&entry.role, &entry.instruct)),
        children: Vec::new(),
        customized: true,
    }
}

//! 指令目录数据模型
//!
//! 三层结构：Group（分栏）→ Category（分类）→ InstructionItem（指令项）。
//! 指令项自身可携带 children 成为分组节点（如「翻译」展开为每种语言一项）。

use serde::{Deserialize, Serialize};

/// 指令项：叶子携带 prompt，分组节点携带非空 children，两者互斥
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionItem {
    /// 全树唯一码，查找与入口注册都以此为键
    pub code: String,
    /// 应用内菜单显示名
    pub name: String,
    /// 快捷入口显示名（注册到宿主菜单时使用），缺省回退到 name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
    /// 指令模板；分组节点为 None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// 子项；非空表示当前节点是分组
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<InstructionItem>,
    /// 是否为用户自定义项
    #[serde(default)]
    pub customized: bool,
}

impl InstructionItem {
    /// 叶子节点（携带模板）
    pub fn leaf(
        code: impl Into<String>,
        name: impl Into<String>,
        feature_name: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            feature_name: Some(feature_name.into()),
            prompt: Some(prompt.into()),
            children: Vec::new(),
            customized: false,
        }
    }

    /// 分组节点（携带子项）
    pub fn group(
        code: impl Into<String>,
        name: impl Into<String>,
        children: Vec<InstructionItem>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            feature_name: None,
            prompt: None,
            children,
            customized: false,
        }
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// 注册到宿主时使用的标签
    pub fn entry_label(&self) -> &str {
        self.feature_name.as_deref().unwrap_or(&self.name)
    }
}

/// 分类：同一 Group 内 name 唯一，items 保序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<InstructionItem>,
}

/// 分栏：纯展示分组，本身没有位置之外的标识
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_label_falls_back_to_name() {
        let item = InstructionItem::leaf("fix", "📝 修正语法", "👉 修正语法", "p");
        assert_eq!(item.entry_label(), "👉 修正语法");

        let group = InstructionItem::group("trans", "🌍 翻译", vec![item]);
        assert!(group.is_group());
        assert_eq!(group.entry_label(), "🌍 翻译");
    }
}

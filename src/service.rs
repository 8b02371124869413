//! 目录查询与编辑门面
//!
//! 持有默认树、当前快照与生效树，注入存储与入口注册表两个外部能力。
//! 生效树只会整体重建，不做原地修补；注册状态不在树上缓存，每次都以外部
//! 注册表为准，重建因此不会造成漂移。

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{self, Group, InstructionItem};
use crate::error::CatalogError;
use crate::feature::FeatureRegistry;
use crate::store::{CustomEntry, CustomSnapshot, CustomStore};

/// 添加自定义指令的表单字段
#[derive(Debug, Clone)]
pub struct CustomForm {
    pub name: String,
    pub role: String,
    pub instruct: String,
}

/// 目录服务
pub struct CatalogService {
    defaults: Vec<Group>,
    snapshot: CustomSnapshot,
    effective: Vec<Group>,
    store: Arc<dyn CustomStore>,
    features: Arc<dyn FeatureRegistry>,
}

impl CatalogService {
    /// 从存储加载快照并构建生效树
    pub fn new(
        store: Arc<dyn CustomStore>,
        features: Arc<dyn FeatureRegistry>,
    ) -> Result<Self, CatalogError> {
        let defaults = catalog::default_groups();
        let snapshot = store.load()?;
        let effective = catalog::refresh(&defaults, &snapshot);
        Ok(Self {
            defaults,
            snapshot,
            effective,
            store,
            features,
        })
    }

    /// 生效树，分栏与分类按固定顺序
    pub fn groups(&self) -> &[Group] {
        &self.effective
    }

    /// 按码查找指令项（先序深度优先，首个命中）
    pub fn find_by_code(&self, code: &str) -> Option<&InstructionItem> {
        catalog::find_by_code(&self.effective, code)
    }

    /// 某个码当前是否注册为快捷入口，以外部注册表为准
    pub fn is_registered(&self, code: &str) -> bool {
        self.features.has(code)
    }

    /// 切换叶子项的入口注册状态，返回新状态；分组节点或未知码返回 None
    pub fn toggle(&self, code: &str) -> Option<bool> {
        let item = self.find_by_code(code)?;
        if item.is_group() {
            return None;
        }

        if self.features.has(code) {
            self.features.unregister(code);
            debug!(code, "已移除快捷入口");
            Some(false)
        } else {
            self.features.register(code, item.entry_label());
            debug!(code, "已注册快捷入口");
            Some(true)
        }
    }

    /// 添加自定义指令并重建生效树，返回派生码（即去空格后的名称）
    ///
    /// 校验或码冲突失败时不发生任何变更。
    pub fn add_custom_item(
        &mut self,
        category: &str,
        form: &CustomForm,
    ) -> Result<String, CatalogError> {
        let name = form.name.trim();
        let role = form.role.trim();
        let instruct = form.instruct.trim();

        let mut empty = Vec::new();
        if name.is_empty() {
            empty.push("name");
        }
        if role.is_empty() {
            empty.push("role");
        }
        if instruct.is_empty() {
            empty.push("instruct");
        }
        if !empty.is_empty() {
            return Err(CatalogError::ValidationFailed { fields: empty });
        }

        let code = name.to_string();
        if self
            .snapshot
            .get(category)
            .is_some_and(|entries| entries.contains_key(&code))
        {
            return Err(CatalogError::DuplicateCodeInCategory {
                category: category.to_string(),
                code,
            });
        }

        let mut next = self.snapshot.clone();
        next.entry(category.to_string()).or_default().insert(
            code.clone(),
            CustomEntry {
                code: code.clone(),
                name: name.to_string(),
                role: role.to_string(),
                instruct: instruct.to_string(),
            },
        );
        self.store.save(&next)?;
        self.snapshot = next;
        self.rebuild();

        info!(category, %code, "已添加自定义指令");
        Ok(code)
    }

    /// 删除自定义指令并重建生效树
    ///
    /// 分类清空时连同分类键一并移除，存储里不会留下空映射；对应的快捷入口
    /// 一并注销。删除不存在的条目是幂等空操作。
    pub fn remove_custom_item(&mut self, category: &str, code: &str) -> Result<(), CatalogError> {
        let mut next = self.snapshot.clone();
        let removed = match next.get_mut(category) {
            Some(entries) => entries.shift_remove(code).is_some(),
            None => false,
        };
        if !removed {
            warn!(category, code, "要删除的自定义指令不存在");
            return Ok(());
        }

        if next.get(category).is_some_and(|entries| entries.is_empty()) {
            next.shift_remove(category);
        }
        self.store.save(&next)?;
        self.snapshot = next;
        self.rebuild();

        self.features.unregister(code);
        info!(category, code, "已删除自定义指令");
        Ok(())
    }

    /// 重新从存储读取快照并重建生效树
    pub fn reload(&mut self) -> Result<(), CatalogError> {
        self.snapshot = self.store.load()?;
        self.rebuild();
        Ok(())
    }

    fn rebuild(&mut self) {
        self.effective = catalog::refresh(&self.defaults, &self.snapshot);
    }
}

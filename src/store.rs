//! 自定义指令快照持久化
//!
//! 快照形如 { 分类名: { 码: 表单字段 } }，两层映射都保持插入顺序，合并时的
//! 追加顺序因此确定。存储由外围应用持有，核心只通过 CustomStore 读写，每次
//! 调用拿到的都是全新快照。

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 用户提交的自定义指令字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEntry {
    pub code: String,
    pub name: String,
    pub role: String,
    pub instruct: String,
}

/// 分类名 → (码 → 表单字段)
pub type CustomSnapshot = IndexMap<String, IndexMap<String, CustomEntry>>;

/// 快照读写接口；落盘方式由实现决定
pub trait CustomStore: Send + Sync {
    fn load(&self) -> anyhow::Result<CustomSnapshot>;
    fn save(&self, snapshot: &CustomSnapshot) -> anyhow::Result<()>;
}

/// 单文件 JSON 存储：文件不存在视为空快照，保存时自动创建父目录
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CustomStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<CustomSnapshot> {
        if !self.path.exists() {
            return Ok(CustomSnapshot::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, snapshot: &CustomSnapshot) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(snapshot)?)?;
        Ok(())
    }
}

/// 内存存储（测试与演示用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<CustomSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前落盘内容（测试断言用）
    pub fn snapshot(&self) -> CustomSnapshot {
        self.snapshot.lock().unwrap().clone()
    }
}

impl CustomStore for MemoryStore {
    fn load(&self) -> anyhow::Result<CustomSnapshot> {
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn save(&self, snapshot: &CustomSnapshot) -> anyhow::Result<()> {
        *self.snapshot.lock().unwrap() = snapshot.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> CustomSnapshot {
        let mut inner = IndexMap::new();
        inner.insert(
            "乙".to_string(),
            CustomEntry {
                code: "乙".to_string(),
                name: "乙".to_string(),
                role: "r1".to_string(),
                instruct: "i1".to_string(),
            },
        );
        inner.insert(
            "甲".to_string(),
            CustomEntry {
                code: "甲".to_string(),
                name: "甲".to_string(),
                role: "r2".to_string(),
                instruct: "i2".to_string(),
            },
        );
        let mut snapshot = CustomSnapshot::new();
        snapshot.insert("编辑类".to_string(), inner);
        snapshot
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("custom_items.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("custom_items.json"));

        let snapshot = sample_snapshot();
        store.save(&snapshot).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, snapshot);
        let codes: Vec<&str> = loaded["编辑类"].keys().map(|k| k.as_str()).collect();
        assert_eq!(codes, vec!["乙", "甲"]);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/dir/custom_items.json"));
        store.save(&sample_snapshot()).unwrap();
        assert!(!store.load().unwrap().is_empty());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        store.save(&sample_snapshot()).unwrap();
        assert_eq!(store.load().unwrap(), sample_snapshot());
    }
}

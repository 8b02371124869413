//! 快捷入口注册表抽象
//!
//! 宿主（启动器）维护码 → 入口的注册状态，真实实现由外围应用注入；核心把它
//! 当作同步、权威的外部依赖。register / unregister 对核心而言幂等：注销一个
//! 未注册的码不是错误。

use std::sync::Mutex;

use indexmap::IndexMap;

/// 入口注册表能力：按码查询、注册（带显示标签）、注销
pub trait FeatureRegistry: Send + Sync {
    fn has(&self, code: &str) -> bool;
    fn register(&self, code: &str, label: &str);
    fn unregister(&self, code: &str);
}

/// 内存注册表（测试与演示用；真实实现由宿主提供）
#[derive(Debug, Default)]
pub struct MemoryFeatureRegistry {
    entries: Mutex<IndexMap<String, String>>,
}

impl MemoryFeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前注册的 (码, 标签) 列表，按注册顺序
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(code, label)| (code.clone(), label.clone()))
            .collect()
    }
}

impl FeatureRegistry for MemoryFeatureRegistry {
    fn has(&self, code: &str) -> bool {
        self.entries.lock().unwrap().contains_key(code)
    }

    fn register(&self, code: &str, label: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), label.to_string());
    }

    fn unregister(&self, code: &str) {
        self.entries.lock().unwrap().shift_remove(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_unregister() {
        let registry = MemoryFeatureRegistry::new();
        assert!(!registry.has("summarize"));

        registry.register("summarize", "👉 总结");
        assert!(registry.has("summarize"));
        assert_eq!(
            registry.entries(),
            vec![("summarize".to_string(), "👉 总结".to_string())]
        );

        registry.unregister("summarize");
        assert!(!registry.has("summarize"));
    }

    #[test]
    fn test_unregister_missing_code_is_noop() {
        let registry = MemoryFeatureRegistry::new();
        registry.unregister("never-registered");
        assert!(registry.entries().is_empty());
    }
}

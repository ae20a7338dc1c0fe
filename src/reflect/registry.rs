//! Registry of introspectable types, keyed by name

use std::collections::BTreeMap;

use crate::reflect::{Reflect, TypeInfo};

#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<&'static str, &'static TypeInfo>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every application type that carries metadata
    pub fn builtin() -> Self {
        use crate::core::model::FrequencyEntry;
        use crate::flows::eleven::{
            DataStorageManager, Parent, StopWordManager, WordFrequencyController,
            WordFrequencyManager,
        };
        use crate::plugins::app1::App1;
        use crate::plugins::app2::App2;

        let mut registry = Self::new();
        registry.register::<Parent>();
        registry.register::<WordFrequencyController>();
        registry.register::<DataStorageManager>();
        registry.register::<StopWordManager>();
        registry.register::<WordFrequencyManager>();
        registry.register::<FrequencyEntry>();
        registry.register::<App1>();
        registry.register::<App2>();
        registry
    }

    pub fn register<T: Reflect>(&mut self) {
        let info = T::type_info();
        self.types.insert(info.path, info);
    }

    /// Resolve a simple name (`StopWordManager`) or a full path
    pub fn resolve(&self, name: &str) -> Option<&'static TypeInfo> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.types.get(name).copied().or_else(|| {
            self.types
                .values()
                .find(|info| info.name == name)
                .copied()
        })
    }

    /// Registered types, sorted by path
    pub fn iter(&self) -> impl Iterator<Item = &'static TypeInfo> + '_ {
        self.types.values().copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resolves_simple_names() {
        let registry = TypeRegistry::builtin();
        for name in [
            "WordFrequencyController",
            "DataStorageManager",
            "StopWordManager",
            "WordFrequencyManager",
            "FrequencyEntry",
            "Parent",
            "App1",
            "App2",
        ] {
            let info = registry.resolve(name).unwrap_or_else(|| panic!("{name}"));
            assert_eq!(info.name, name);
        }
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_resolve_by_full_path() {
        let registry = TypeRegistry::builtin();
        let info = registry.resolve("StopWordManager").unwrap();
        let again = registry.resolve(info.path).unwrap();
        assert!(std::ptr::eq(info, again));
    }

    #[test]
    fn test_resolve_unknown_and_blank() {
        let registry = TypeRegistry::builtin();
        assert!(registry.resolve("NoSuchType").is_none());
        assert!(registry.resolve("   ").is_none());
        assert!(TypeRegistry::new().is_empty());
    }

    #[test]
    fn test_resolve_trims_input_line() {
        let registry = TypeRegistry::builtin();
        assert!(registry.resolve("Parent\n").is_some());
    }
}

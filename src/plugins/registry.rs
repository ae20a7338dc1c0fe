//! Registered plugin packages
//!
//! Packages are registered explicitly by name. The loader resolves a
//! package path to one of these names at run time.

use std::collections::BTreeMap;

use crate::plugins::contract::TypeExport;

/// A self-contained application package
#[derive(Debug, Clone)]
pub struct PluginPackage {
    pub name: String,
    pub description: String,
    pub exports: Vec<TypeExport>,
}

impl PluginPackage {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exports: Vec::new(),
        }
    }

    pub fn with_export(mut self, export: TypeExport) -> Self {
        self.exports.push(export);
        self
    }

    /// Find an exported type by its exact name
    pub fn export(&self, type_name: &str) -> Option<&TypeExport> {
        self.exports.iter().find(|e| e.name == type_name)
    }
}

#[derive(Debug, Default)]
pub struct PluginRegistry {
    packages: BTreeMap<String, PluginPackage>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two bundled application packages
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(crate::plugins::app1::package());
        registry.register(crate::plugins::app2::package());
        registry
    }

    /// Register a package; a later package with the same name replaces it
    pub fn register(&mut self, package: PluginPackage) {
        self.packages.insert(package.name.to_lowercase(), package);
    }

    pub fn get(&self, name: &str) -> Option<&PluginPackage> {
        self.packages.get(&name.to_lowercase())
    }

    /// Packages sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &PluginPackage> {
        self.packages.values()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

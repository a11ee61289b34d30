use super::{resolve_name, ResourceBundle, ResourceStream};
use std::collections::BTreeMap;

/// Bundle held in memory, for tests and programs that assemble resources at runtime
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    base: String,
    resources: BTreeMap<String, Vec<u8>>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Adds a resource; `name` is taken relative to the namespace root
    pub fn with_resource(mut self, name: impl AsRef<str>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl AsRef<str>, bytes: impl Into<Vec<u8>>) {
        let key = name.as_ref().trim_start_matches('/').to_string();
        self.resources.insert(key, bytes.into());
    }
}

impl ResourceBundle for MemoryBundle {
    fn open(&self, name: &str) -> Option<ResourceStream> {
        let key = resolve_name(&self.base, name);
        self.resources
            .get(&key)
            .map(|bytes| ResourceStream::from_bytes(key, bytes.clone()))
    }

    fn names(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }
}

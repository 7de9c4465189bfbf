pub mod codec;
pub mod store;

pub use codec::{parse, write};
pub use store::{FileManifestStore, ManifestStore, MemoryManifestStore, MANIFEST_NAME};

use indexmap::IndexMap;

use crate::attributes::AttributeName;

/// Ordered header map of one manifest section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<AttributeName, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &AttributeName) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Looks up by header text; names that are not valid headers are never
    /// present.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        AttributeName::new(name).ok().and_then(|n| self.get(&n))
    }

    pub fn contains(&self, name: &AttributeName) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts or replaces, keeping the original position on replace.
    pub fn insert(&mut self, name: AttributeName, value: impl Into<String>) {
        self.entries.insert(name, value.into());
    }

    /// Returns `false` and leaves the section untouched when `name` exists.
    pub fn insert_if_absent(&mut self, name: AttributeName, value: impl Into<String>) -> bool {
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, value.into());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeName, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-entry section introduced by a `Name:` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub main: Attributes,
    pub sections: Vec<Section>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }
}

pub mod known;

use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::engine::Resolver;
use crate::error::ConfigError;

/// Manifest header name. Compares and hashes case-insensitively but keeps
/// the casing it was created with.
#[derive(Debug, Clone)]
pub struct AttributeName(String);

impl AttributeName {
    pub const MAX_LEN: usize = 70;

    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(ConfigError::illegal_name(name))
        }
    }

    /// For the header constants in [`known`], which are valid by construction.
    pub fn known(name: &'static str) -> Self {
        debug_assert!(is_valid(name), "invalid known header {name}");
        Self(name.to_string())
    }

    /// Like [`AttributeName::new`], additionally refusing names that may not
    /// be requested through options (`From*`, `Name`).
    pub fn configurable(name: &str) -> Result<Self, ConfigError> {
        if name.starts_with("From") || name.eq_ignore_ascii_case("Name") {
            return Err(ConfigError::illegal_name(name));
        }
        Self::new(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

fn is_valid(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= AttributeName::MAX_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

impl PartialEq for AttributeName {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for AttributeName {}

impl Hash for AttributeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AttributeName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug)]
pub enum AttributeValue {
    Literal(String),
    Pending(Box<dyn Resolver>),
}

impl AttributeValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn pending(resolver: impl Resolver + 'static) -> Self {
        Self::Pending(Box::new(resolver))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Requested attributes in the order they were configured.
#[derive(Debug, Default)]
pub struct AttributeTable {
    entries: IndexMap<AttributeName, AttributeValue>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`. A second registration of the same name is refused
    /// and the first one stays; the error names it with its first-seen casing.
    pub fn add(&mut self, name: AttributeName, value: AttributeValue) -> Result<(), ConfigError> {
        if let Some((existing, _)) = self.entries.get_key_value(&name) {
            return Err(ConfigError::duplicate_name(existing.as_str()));
        }
        self.entries.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &AttributeName) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &AttributeName> {
        self.entries.keys()
    }

    pub fn pending_mut(&mut self) -> impl Iterator<Item = (&AttributeName, &mut Box<dyn Resolver>)> {
        self.entries.iter_mut().filter_map(|(name, value)| match value {
            AttributeValue::Pending(resolver) => Some((name, resolver)),
            AttributeValue::Literal(_) => None,
        })
    }

    /// Empties the table, yielding entries in registration order.
    pub fn drain(&mut self) -> impl Iterator<Item = (AttributeName, AttributeValue)> {
        std::mem::take(&mut self.entries).into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

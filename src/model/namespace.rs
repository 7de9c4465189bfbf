use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::prefix::join;

/// Dotted package path. The empty path is the unnamed package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Namespace {
    components: Vec<String>,
}

impl Namespace {
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn parse(qualified_name: &str) -> Self {
        if qualified_name.is_empty() {
            return Self::unnamed();
        }
        Self {
            components: qualified_name.split('.').map(str::to_string).collect(),
        }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn is_unnamed(&self) -> bool {
        self.components.is_empty()
    }

    /// Qualifies `simple_name` with this namespace.
    pub fn qualify(&self, simple_name: &str) -> String {
        if self.is_unnamed() {
            simple_name.to_string()
        } else {
            format!("{self}.{simple_name}")
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.components, '.'))
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for Namespace {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.to_string()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

pub const VOID: &str = "void";
pub const STRING: &str = "java.lang.String";
pub const INSTRUMENTATION: &str = "java.lang.instrument.Instrumentation";

/// Canonical type descriptor: fully qualified, generics erased, one `[]` per
/// array dimension. Primitives and `void` are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    pub fn void() -> Self {
        Self::new(VOID)
    }

    pub fn string() -> Self {
        Self::new(STRING)
    }

    pub fn instrumentation() -> Self {
        Self::new(INSTRUMENTATION)
    }

    pub fn array(self) -> Self {
        Self(format!("{}[]", self.0))
    }

    pub fn is_void(&self) -> bool {
        self.0 == VOID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

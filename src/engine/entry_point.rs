use std::collections::BTreeSet;

use tracing::trace;

use super::visitor::{walk_members, DeclarationVisitor};
use super::Resolver;
use crate::error::ResolutionError;
use crate::model::{ExecutableDecl, ExecutableKind, Modifier, TypeDecl, TypeRef};

/// Finds the single class declaring a `public static void <name>(...)` method
/// whose parameter list is one of the accepted signatures.
#[derive(Debug)]
pub struct EntryPointResolver {
    name: String,
    signatures: Vec<Vec<TypeRef>>,
    class_names: BTreeSet<String>,
}

impl EntryPointResolver {
    pub fn new(name: impl Into<String>, signatures: Vec<Vec<TypeRef>>) -> Self {
        Self {
            name: name.into(),
            signatures,
            class_names: BTreeSet::new(),
        }
    }

    /// `public static void main(String[])`
    pub fn main() -> Self {
        Self::new("main", vec![vec![TypeRef::string().array()]])
    }

    /// `public static void premain(String[, Instrumentation])`
    pub fn premain() -> Self {
        Self::agent("premain")
    }

    /// `public static void agentmain(String[, Instrumentation])`
    pub fn agentmain() -> Self {
        Self::agent("agentmain")
    }

    fn agent(name: &str) -> Self {
        Self::new(
            name,
            vec![
                vec![TypeRef::string(), TypeRef::instrumentation()],
                vec![TypeRef::string()],
            ],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_names(&self) -> &BTreeSet<String> {
        &self.class_names
    }

    fn is_entry_point(&self, e: &ExecutableDecl) -> bool {
        e.kind == ExecutableKind::Method
            && e.name == self.name
            && e.has_modifier(Modifier::Public)
            && e.has_modifier(Modifier::Static)
            && e.return_type.is_void()
            && self.signatures.iter().any(|s| *s == e.parameters)
    }
}

impl DeclarationVisitor for EntryPointResolver {
    fn visit_type(&mut self, ty: &TypeDecl) {
        walk_members(self, ty);
    }

    fn visit_executable(&mut self, executable: &ExecutableDecl) {
        if self.is_entry_point(executable) {
            trace!(method = %self.name, class = %executable.owner, "entry point candidate");
            self.class_names.insert(executable.owner.clone());
        }
    }
}

impl Resolver for EntryPointResolver {
    fn finalize(&self) -> Result<String, ResolutionError> {
        let mut names = self.class_names.iter();
        match (names.next(), names.next()) {
            (None, _) => Err(ResolutionError::no_entry_point(&self.name)),
            (Some(only), None) => Ok(only.clone()),
            _ => Err(ResolutionError::multiple_entry_points(
                &self.name,
                self.class_names.iter().cloned().collect(),
            )),
        }
    }
}

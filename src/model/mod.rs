//! Declaration tree model.
//!
//! A forest of these nodes is what one processing round sees: packages,
//! types with their ordered members, executables, variables, and anything
//! else the source produced (module declarations, for instance).
pub mod namespace;
pub mod type_ref;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use namespace::Namespace;
pub use type_ref::TypeRef;

/// Common view over every declaration kind.
pub trait Element {
    fn simple_name(&self) -> &str;

    /// Enclosing package, or `None` when the node has none (modules).
    fn package_of(&self) -> Option<&Namespace>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Package(PackageDecl),
    Type(TypeDecl),
    Executable(ExecutableDecl),
    Variable(VariableDecl),
    Other(OtherDecl),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Sealed,
    NonSealed,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Default,
}

impl Modifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            "abstract" => Self::Abstract,
            "static" => Self::Static,
            "final" => Self::Final,
            "sealed" => Self::Sealed,
            "non-sealed" => Self::NonSealed,
            "transient" => Self::Transient,
            "volatile" => Self::Volatile,
            "synchronized" => Self::Synchronized,
            "native" => Self::Native,
            "strictfp" => Self::Strictfp,
            "default" => Self::Default,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutableKind {
    Method,
    Constructor,
    StaticInit,
    InstanceInit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    Field,
    EnumConstant,
    RecordComponent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDecl {
    pub namespace: Namespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub binary_name: String,
    #[serde(rename = "type_kind")]
    pub kind: TypeKind,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    #[serde(default)]
    pub namespace: Namespace,
    #[serde(default)]
    pub members: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableDecl {
    pub name: String,
    #[serde(rename = "executable_kind")]
    pub kind: ExecutableKind,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<TypeRef>,
    /// Binary name of the enclosing type.
    pub owner: String,
    #[serde(default)]
    pub namespace: Namespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDecl {
    pub name: String,
    #[serde(rename = "variable_kind")]
    pub kind: VariableKind,
    pub ty: TypeRef,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    #[serde(default)]
    pub namespace: Namespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherDecl {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<Namespace>,
}

impl PackageDecl {
    pub fn new(namespace: impl Into<Namespace>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl TypeDecl {
    pub fn new(kind: TypeKind, namespace: impl Into<Namespace>, name: &str) -> Self {
        let namespace = namespace.into();
        Self {
            name: name.to_string(),
            binary_name: namespace.qualify(name),
            kind,
            modifiers: BTreeSet::new(),
            namespace,
            members: Vec::new(),
        }
    }

    pub fn class(namespace: impl Into<Namespace>, name: &str) -> Self {
        Self::new(TypeKind::Class, namespace, name)
    }

    /// A member type of `self`; binary names nest with `$`.
    pub fn nested(&self, kind: TypeKind, name: &str) -> Self {
        Self {
            name: name.to_string(),
            binary_name: format!("{}${}", self.binary_name, name),
            kind,
            modifiers: BTreeSet::new(),
            namespace: self.namespace.clone(),
            members: Vec::new(),
        }
    }

    /// A method owned by `self`, not yet added as a member.
    pub fn method(&self, name: &str, return_type: TypeRef, parameters: Vec<TypeRef>) -> ExecutableDecl {
        ExecutableDecl {
            name: name.to_string(),
            kind: ExecutableKind::Method,
            modifiers: BTreeSet::new(),
            return_type,
            parameters,
            owner: self.binary_name.clone(),
            namespace: self.namespace.clone(),
        }
    }

    pub fn field(&self, name: &str, ty: TypeRef) -> VariableDecl {
        VariableDecl {
            name: name.to_string(),
            kind: VariableKind::Field,
            ty,
            modifiers: BTreeSet::new(),
            namespace: self.namespace.clone(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn with_member(mut self, member: impl Into<Declaration>) -> Self {
        self.members.push(member.into());
        self
    }
}

impl ExecutableDecl {
    pub fn with_kind(mut self, kind: ExecutableKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

impl VariableDecl {
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }
}

impl OtherDecl {
    pub fn new(name: impl Into<String>, namespace: Option<Namespace>) -> Self {
        Self {
            name: name.into(),
            namespace,
        }
    }
}

impl Element for PackageDecl {
    fn simple_name(&self) -> &str {
        self.namespace
            .components()
            .last()
            .map(String::as_str)
            .unwrap_or("")
    }

    fn package_of(&self) -> Option<&Namespace> {
        Some(&self.namespace)
    }
}

impl Element for TypeDecl {
    fn simple_name(&self) -> &str {
        &self.name
    }

    fn package_of(&self) -> Option<&Namespace> {
        Some(&self.namespace)
    }
}

impl Element for ExecutableDecl {
    fn simple_name(&self) -> &str {
        &self.name
    }

    fn package_of(&self) -> Option<&Namespace> {
        Some(&self.namespace)
    }
}

impl Element for VariableDecl {
    fn simple_name(&self) -> &str {
        &self.name
    }

    fn package_of(&self) -> Option<&Namespace> {
        Some(&self.namespace)
    }
}

impl Element for OtherDecl {
    fn simple_name(&self) -> &str {
        &self.name
    }

    fn package_of(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }
}

impl Element for Declaration {
    fn simple_name(&self) -> &str {
        match self {
            Self::Package(p) => p.simple_name(),
            Self::Type(t) => t.simple_name(),
            Self::Executable(e) => e.simple_name(),
            Self::Variable(v) => v.simple_name(),
            Self::Other(o) => o.simple_name(),
        }
    }

    fn package_of(&self) -> Option<&Namespace> {
        match self {
            Self::Package(p) => p.package_of(),
            Self::Type(t) => t.package_of(),
            Self::Executable(e) => e.package_of(),
            Self::Variable(v) => v.package_of(),
            Self::Other(o) => o.package_of(),
        }
    }
}

impl From<PackageDecl> for Declaration {
    fn from(p: PackageDecl) -> Self {
        Self::Package(p)
    }
}

impl From<TypeDecl> for Declaration {
    fn from(t: TypeDecl) -> Self {
        Self::Type(t)
    }
}

impl From<ExecutableDecl> for Declaration {
    fn from(e: ExecutableDecl) -> Self {
        Self::Executable(e)
    }
}

impl From<VariableDecl> for Declaration {
    fn from(v: VariableDecl) -> Self {
        Self::Variable(v)
    }
}

impl From<OtherDecl> for Declaration {
    fn from(o: OtherDecl) -> Self {
        Self::Other(o)
    }
}

pub mod entry_point;
pub mod namespace;
pub mod prefix;
pub mod visitor;

pub use entry_point::EntryPointResolver;
pub use namespace::NamespaceResolver;
pub use prefix::CommonPrefix;
pub use visitor::{walk_members, DeclarationVisitor};

use std::fmt;

use crate::error::ResolutionError;

/// A visitor that narrows toward one attribute value over any number of
/// rounds, then yields it once at the end.
pub trait Resolver: DeclarationVisitor + fmt::Debug {
    fn finalize(&self) -> Result<String, ResolutionError>;
}

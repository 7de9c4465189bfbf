//! automanifest
//!
//! Derives JAR manifest attributes (`Main-Class`, `Premain-Class`,
//! `Automatic-Module-Name`, build facts) from the declarations of a Java
//! project and merges them into `META-INF/MANIFEST.MF` without overwriting
//! what is already there.
pub mod attributes;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod env;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod model;
pub mod processor;
pub mod source;

pub use engine::{DeclarationVisitor, Resolver};
pub use error::{Error, Result};
pub use model::Declaration;
pub use processor::{ManifestProcessor, Round};

//! Declaration sources: Java source trees parsed with tree-sitter, or JSON
//! dumps of an already-built declaration forest.

pub mod java;

pub use java::JavaSource;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{IoError, Result, SourceError};
use crate::model::Declaration;

/// Build output directories, skipped only directly under the walk root;
/// deeper down the same names are ordinary packages (`com.acme.build`).
const EXCLUDED_DIRS: &[&str] = &["target", "build", "out", "node_modules"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    JavaTree,
    JavaFile,
    Dump,
}

impl SourceKind {
    /// `None` for files that are neither `.java` nor `.json`.
    pub fn detect(path: &Path) -> Option<Self> {
        if path.is_dir() {
            return Some(Self::JavaTree);
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("java") => Some(Self::JavaFile),
            Some("json") => Some(Self::Dump),
            _ => None,
        }
    }
}

/// Loads every root declaration found under `path`.
pub fn load_declarations(path: &Path) -> Result<Vec<Declaration>> {
    if !path.exists() {
        return Err(IoError::not_found(path).into());
    }
    let kind = SourceKind::detect(path).ok_or_else(|| SourceError::unsupported_source(path))?;
    trace!(path = %path.display(), ?kind, "loading declarations");

    let roots = match kind {
        SourceKind::Dump => load_dump(path)?,
        SourceKind::JavaFile => JavaSource::new()?.parse_file(path)?,
        SourceKind::JavaTree => {
            let mut source = JavaSource::new()?;
            let mut roots = Vec::new();
            for file in java_files(path)? {
                roots.extend(source.parse_file(&file)?);
            }
            roots
        }
    };
    debug!(path = %path.display(), roots = roots.len(), "loaded declarations");
    Ok(roots)
}

pub fn load_dump(path: &Path) -> Result<Vec<Declaration>> {
    let text = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
    let roots = serde_json::from_str(&text)
        .map_err(|e| SourceError::invalid_dump(path, e.to_string()))?;
    Ok(roots)
}

/// `*.java` files under `root` in file-name order, skipping hidden
/// directories and top-level build output.
pub fn java_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|e| {
        if e.depth() == 0 || !e.file_type().is_dir() {
            return true;
        }
        let name = e.file_name().to_string_lossy();
        if name.starts_with('.') {
            return false;
        }
        e.depth() > 1 || !EXCLUDED_DIRS.contains(&name.as_ref())
    });

    for entry in walker {
        let entry = entry.map_err(|e| IoError::walk_error(root, e.to_string()))?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == "java") {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

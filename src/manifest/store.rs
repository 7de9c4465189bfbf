use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::{codec, Manifest};
use crate::error::{IoError, Result};

/// Location of the manifest inside a class output directory.
pub const MANIFEST_NAME: &str = "META-INF/MANIFEST.MF";

/// Where the manifest being updated lives.
pub trait ManifestStore {
    /// The existing manifest, or `None` if there is none yet.
    fn read(&mut self) -> Result<Option<Manifest>>;

    fn write(&mut self, manifest: &Manifest) -> Result<()>;
}

pub struct FileManifestStore {
    path: PathBuf,
}

impl FileManifestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/META-INF/MANIFEST.MF`
    pub fn in_output_dir(dir: &Path) -> Self {
        Self::new(dir.join(MANIFEST_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestStore for FileManifestStore {
    fn read(&mut self) -> Result<Option<Manifest>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "no existing manifest");
                return Ok(None);
            }
            Err(e) => return Err(IoError::read_error(&self.path, e).into()),
        };
        let manifest = codec::parse(&text)?;
        debug!(path = %self.path.display(), attributes = manifest.main.len(), "read existing manifest");
        Ok(Some(manifest))
    }

    fn write(&mut self, manifest: &Manifest) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| IoError::write_error(parent, e))?;
        }
        fs::write(&self.path, codec::write(manifest))
            .map_err(|e| IoError::write_error(&self.path, e))?;
        debug!(path = %self.path.display(), "wrote manifest");
        Ok(())
    }
}

/// Keeps the manifest in memory; what was last written is what is read.
#[derive(Debug, Default)]
pub struct MemoryManifestStore {
    manifest: Option<Manifest>,
}

impl MemoryManifestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(manifest: Manifest) -> Self {
        Self {
            manifest: Some(manifest),
        }
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    pub fn into_manifest(self) -> Option<Manifest> {
        self.manifest
    }
}

impl ManifestStore for MemoryManifestStore {
    fn read(&mut self) -> Result<Option<Manifest>> {
        Ok(self.manifest.clone())
    }

    fn write(&mut self, manifest: &Manifest) -> Result<()> {
        self.manifest = Some(manifest.clone());
        Ok(())
    }
}

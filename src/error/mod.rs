mod config;
mod io;
mod manifest;
mod resolution;
mod source;

pub use config::ConfigError;
pub use io::IoError;
pub use manifest::ManifestError;
pub use resolution::ResolutionError;
pub use source::SourceError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("unsupported source file: {path}")]
    UnsupportedSource { path: PathBuf },

    #[error("failed to set parser language: {language}")]
    LanguageSetupFailed { language: String },

    #[error("failed to parse source code in {path}")]
    ParseFailed { path: PathBuf },

    #[error("invalid declaration dump '{path}': {message}")]
    InvalidDump { path: PathBuf, message: String },
}

impl SourceError {
    pub fn unsupported_source(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedSource { path: path.into() }
    }

    pub fn language_setup_failed(language: impl Into<String>) -> Self {
        Self::LanguageSetupFailed {
            language: language.into(),
        }
    }

    pub fn parse_failed(path: impl Into<PathBuf>) -> Self {
        Self::ParseFailed { path: path.into() }
    }

    pub fn invalid_dump(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidDump {
            path: path.into(),
            message: message.into(),
        }
    }
}

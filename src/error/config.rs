use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Illegal name: {name}")]
    IllegalName { name: String },

    #[error("Unrecognized name: {name}")]
    UnrecognizedName { name: String },

    #[error("Duplicate name: {name}")]
    DuplicateName { name: String },

    #[error("No value available for {name}")]
    Unavailable { name: String },

    #[error("failed to read config file '{path}': {message}")]
    ConfigFileReadError { path: PathBuf, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    ConfigParseError { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn illegal_name(name: impl Into<String>) -> Self {
        Self::IllegalName { name: name.into() }
    }

    pub fn unrecognized_name(name: impl Into<String>) -> Self {
        Self::UnrecognizedName { name: name.into() }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn unavailable(name: impl Into<String>) -> Self {
        Self::Unavailable { name: name.into() }
    }

    pub fn config_file_read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigFileReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ManifestError {
    #[error("invalid header at line {line}: {text}")]
    InvalidHeader { line: usize, text: String },

    #[error("invalid attribute name at line {line}: {name}")]
    InvalidName { line: usize, name: String },

    #[error("continuation line without a header at line {line}")]
    OrphanContinuation { line: usize },

    #[error("section at line {line} does not start with Name")]
    MissingSectionName { line: usize },
}

impl ManifestError {
    pub fn invalid_header(line: usize, text: impl Into<String>) -> Self {
        Self::InvalidHeader {
            line,
            text: text.into(),
        }
    }

    pub fn invalid_name(line: usize, name: impl Into<String>) -> Self {
        Self::InvalidName {
            line,
            name: name.into(),
        }
    }
}

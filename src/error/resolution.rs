use thiserror::Error;

/// Why a resolver produced no value. Reported as a warning; the attribute is
/// left out of the manifest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Found no common package")]
    NoCommonNamespace,

    #[error("Found no {name} method")]
    NoEntryPoint { name: String },

    #[error("Found multiple {name} methods: [{}]", .classes.join(", "))]
    MultipleEntryPoints { name: String, classes: Vec<String> },
}

impl ResolutionError {
    pub fn no_entry_point(name: impl Into<String>) -> Self {
        Self::NoEntryPoint { name: name.into() }
    }

    pub fn multiple_entry_points(name: impl Into<String>, classes: Vec<String>) -> Self {
        Self::MultipleEntryPoints {
            name: name.into(),
            classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_entry_point_display() {
        let err = ResolutionError::no_entry_point("main");
        assert_eq!(err.to_string(), "Found no main method");
    }

    #[test]
    fn test_multiple_entry_points_display() {
        let err = ResolutionError::multiple_entry_points(
            "premain",
            vec!["a.Agent".to_string(), "b.Agent".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "Found multiple premain methods: [a.Agent, b.Agent]"
        );
    }

    #[test]
    fn test_no_common_namespace_display() {
        assert_eq!(
            ResolutionError::NoCommonNamespace.to_string(),
            "Found no common package"
        );
    }
}

pub mod options;

pub use options::{parse_options, AttributeOption, OptionValue, DEFAULT_OPTIONS};

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::env::BuildEnvironment;
use crate::error::ConfigError;

/// Optional project file (`automanifest.yaml`).
///
/// ```yaml
/// attributes: Main-Class,Automatic-Module-Name,Built-By
/// environment:
///   user_name: release-bot
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub attributes: Option<AttributeList>,
    pub environment: BuildEnvironment,
}

/// Either the comma-separated option string or a YAML list of its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AttributeList {
    Options(String),
    List(Vec<String>),
}

impl AttributeList {
    pub fn to_options(&self) -> String {
        match self {
            Self::Options(s) => s.clone(),
            Self::List(items) => items.join(","),
        }
    }
}

impl ProjectConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading project config");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::config_file_read_error(path, e.to_string()))?;
        let config: ProjectConfig = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::config_parse_error(path, e.to_string()))?;

        debug!(attributes = ?config.attributes, "loaded project config");
        Ok(config)
    }

    pub fn options(&self) -> Option<String> {
        self.attributes.as_ref().map(AttributeList::to_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_string_attributes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("automanifest.yaml");
        fs::write(
            &path,
            "attributes: Main-Class,Built-By\nenvironment:\n  user_name: release-bot\n",
        )
        .unwrap();

        let config = ProjectConfig::load(&path).unwrap();
        assert_eq!(config.options().as_deref(), Some("Main-Class,Built-By"));
        assert_eq!(config.environment.user_name.as_deref(), Some("release-bot"));
    }

    #[test]
    fn test_load_list_attributes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("automanifest.yaml");
        fs::write(
            &path,
            "attributes:\n  - Main-Class\n  - \"X-Team:platform\"\n",
        )
        .unwrap();

        let config = ProjectConfig::load(&path).unwrap();
        assert_eq!(config.options().as_deref(), Some("Main-Class,X-Team:platform"));
        assert_eq!(config.environment, BuildEnvironment::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProjectConfig::load("/nonexistent/automanifest.yaml").unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("automanifest.yaml");
        fs::write(&path, "attributes: [unclosed\n").unwrap();

        let err = ProjectConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config file"));
    }
}

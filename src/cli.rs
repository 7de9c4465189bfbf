use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::source::SourceKind;

#[derive(Parser, Debug)]
#[command(name = "automanifest")]
#[command(about = "Derive JAR manifest attributes from Java declarations", long_about = None)]
pub struct Args {
    /// Source directory, .java file or JSON declaration dump. Repeat for
    /// several rounds; each path is processed as one round.
    #[arg(long, value_name = "PATH", required = true)]
    pub path: Vec<PathBuf>,

    /// Class output directory holding META-INF/MANIFEST.MF (prints the
    /// manifest to stdout if not specified)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Attributes to add, e.g. "Main-Class,Automatic-Module-Name,X-Team:core"
    #[arg(short, long, value_name = "OPTIONS")]
    pub attributes: Option<String>,

    /// Project config file (YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        for path in &self.path {
            validate_path(path)?;
            if detect_source_kind(path).is_none() {
                anyhow::bail!(
                    "Unsupported source: {} (expected a directory, .java or .json file)",
                    path.display()
                );
            }
        }
        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        if let Some(ref output) = self.output {
            if output.exists() && !output.is_dir() {
                anyhow::bail!("Output is not a directory: {}", output.display());
            }
        }
        Ok(())
    }
}

pub fn detect_source_kind(path: &Path) -> Option<SourceKind> {
    SourceKind::detect(path)
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(path: Vec<PathBuf>) -> Args {
        Args {
            path,
            output: None,
            attributes: None,
            config: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_detect_source_kind() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(detect_source_kind(temp_dir.path()), Some(SourceKind::JavaTree));
        assert_eq!(detect_source_kind(Path::new("App.java")), Some(SourceKind::JavaFile));
        assert_eq!(detect_source_kind(Path::new("roots.json")), Some(SourceKind::Dump));
        assert_eq!(detect_source_kind(Path::new("App.kt")), None);
    }

    #[test]
    fn test_validate_path_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("App.java");
        fs::write(&file_path, "class App {}").unwrap();

        assert!(validate_path(&file_path).is_ok());
    }

    #[test]
    fn test_validate_path_not_exists() {
        let path = Path::new("/nonexistent/path/that/does/not/exist");
        assert!(validate_path(path).is_err());
    }

    #[test]
    fn test_args_validate_all_valid() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("App.java");
        fs::write(&file_path, "class App {}").unwrap();
        let config_path = temp_dir.path().join("automanifest.yaml");
        fs::write(&config_path, "attributes: Main-Class\n").unwrap();

        let mut args = args(vec![temp_dir.path().to_path_buf(), file_path]);
        args.config = Some(config_path);
        args.output = Some(temp_dir.path().join("classes"));

        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_args_validate_unsupported_source() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("App.kt");
        fs::write(&file_path, "class App").unwrap();

        let err = args(vec![file_path]).validate().unwrap_err();
        assert!(err.to_string().contains("Unsupported source"));
    }

    #[test]
    fn test_args_validate_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = args(vec![temp_dir.path().to_path_buf()]);
        args.config = Some(temp_dir.path().join("missing.yaml"));

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_args_validate_output_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out");
        fs::write(&file_path, "").unwrap();

        let mut args = args(vec![temp_dir.path().to_path_buf()]);
        args.output = Some(file_path);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_parse_repeated_paths() {
        let args = Args::try_parse_from([
            "automanifest",
            "--path",
            "src/main/java",
            "--path",
            "build/generated",
            "-a",
            "Main-Class,Built-By:ci",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.path.len(), 2);
        assert_eq!(args.attributes.as_deref(), Some("Main-Class,Built-By:ci"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_parse_requires_path() {
        assert!(Args::try_parse_from(["automanifest"]).is_err());
    }
}

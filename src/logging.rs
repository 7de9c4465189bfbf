use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::diagnostics::Severity;

/// Declared from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Error diagnostics only; the exit status carries the rest.
    Quiet,
    /// Warnings such as unresolved attributes.
    Normal,
    /// Also the attributes merged into the manifest.
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Whether diagnostics of `severity` reach the terminal without
    /// `RUST_LOG` set.
    pub fn shows(self, severity: Severity) -> bool {
        let level = match severity {
            Severity::Note => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Error => Level::ERROR,
        };
        level <= self.to_level()
    }

    /// Default directive when `RUST_LOG` is unset.
    fn to_filter(self) -> String {
        let level = self.to_level();
        format!("automanifest={level}")
    }
}

/// Installs the global subscriber on stderr, leaving stdout to the printed
/// manifest. Timestamps and source locations appear from `-v` and `-vv`.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .with_writer(std::io::stderr)
        .compact();

    if verbosity >= Verbosity::Verbose {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(0, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(2, false), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(3, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(10, false), Verbosity::Trace);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
    }

    #[test]
    fn test_default_filter_targets_crate() {
        assert_eq!(Verbosity::Normal.to_filter(), "automanifest=WARN");
        assert_eq!(Verbosity::Verbose.to_filter(), "automanifest=INFO");
        assert_eq!(Verbosity::Quiet.to_filter(), "automanifest=ERROR");
    }

    #[test]
    fn test_quiet_still_shows_errors() {
        assert!(Verbosity::Quiet.shows(Severity::Error));
        assert!(!Verbosity::Quiet.shows(Severity::Warning));
    }

    #[test]
    fn test_notes_need_verbose() {
        assert!(Verbosity::Normal.shows(Severity::Warning));
        assert!(!Verbosity::Normal.shows(Severity::Note));
        assert!(Verbosity::Verbose.shows(Severity::Note));
        assert!(Verbosity::Trace.shows(Severity::Note));
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Quiet < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::Debug);
        assert!(Verbosity::Debug < Verbosity::Trace);
    }
}

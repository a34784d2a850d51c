//! Diagnostic event levels and the `RUST_LOG` display threshold

use std::env;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[strum(serialize = "warn", serialize = "warning")]
    Warn,
    Error,
}

impl LogLevel {
    /// Whether an event at this level clears `threshold`.
    pub fn passes(self, threshold: LogLevel) -> bool {
        self >= threshold
    }

    /// Whether an event at this level clears the `RUST_LOG` threshold.
    pub fn passes_env_threshold(self) -> bool {
        self.passes(env_threshold())
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        log::Level::from(level).to_level_filter()
    }
}

/// Threshold named by `RUST_LOG`, `Info` when unset.
pub fn env_threshold() -> LogLevel {
    env::var("RUST_LOG")
        .map(|directives| threshold_from_directives(&directives))
        .unwrap_or(LogLevel::Info)
}

/// Level of the first directive. `crate=level` and bare `level` are accepted;
/// anything unparseable means `Info`.
pub fn threshold_from_directives(directives: &str) -> LogLevel {
    directives
        .split(',')
        .next()
        .and_then(|directive| directive.rsplit('=').next())
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(LogLevel::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_from_directives() {
        assert_eq!(threshold_from_directives("debug"), LogLevel::Debug);
        assert_eq!(threshold_from_directives("WARNING"), LogLevel::Warn);
        assert_eq!(threshold_from_directives("error"), LogLevel::Error);

        // Module-specific formats
        assert_eq!(
            threshold_from_directives("team_dashboard=trace"),
            LogLevel::Trace
        );
        assert_eq!(
            threshold_from_directives("team_dashboard=debug,reqwest=info"),
            LogLevel::Debug
        );

        assert_eq!(threshold_from_directives(""), LogLevel::Info);
        assert_eq!(threshold_from_directives("verbose"), LogLevel::Info);
    }

    #[test]
    fn test_passes() {
        assert!(LogLevel::Error.passes(LogLevel::Debug));
        assert!(LogLevel::Warn.passes(LogLevel::Warn));
        assert!(!LogLevel::Debug.passes(LogLevel::Info));
    }

    #[test]
    fn test_level_maps_onto_log_facade() {
        assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }
}

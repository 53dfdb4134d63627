//! Verbosity ladder and log configuration.

use std::fmt;
use std::str::FromStr;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "HTACL_LOG";

/// Fallback environment variable understood by most tracing-based tools.
const RUST_LOG_VAR: &str = "RUST_LOG";

/// Severity threshold applied when no override directive is present.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings, such as skipped malformed records.
    #[default]
    Warn,
    /// Adds one line per opened ACL and returned entry.
    Info,
    /// Adds per-record template and method decisions.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Maps a `-v` occurrence count onto the ladder.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        match level {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Returns the level name as an `EnvFilter` directive.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`LogLevel`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLogLevelError(String);

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level '{}'", self.0)
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLogLevelError(s.to_owned())),
        }
    }
}

/// Log level plus an optional filter directive that replaces it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    level: LogLevel,
    directive_override: Option<String>,
}

impl LogConfig {
    /// Creates a configuration for `level` with no override.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level,
            directive_override: None,
        }
    }

    /// Creates a configuration from a `-v` occurrence count.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self::new(LogLevel::from_verbose_level(level))
    }

    /// Sets the override directive. Blank strings are ignored.
    #[must_use]
    pub fn with_override(mut self, directive: Option<String>) -> Self {
        self.directive_override = directive.filter(|value| !value.trim().is_empty());
        self
    }

    /// Reads the override from [`LOG_ENV_VAR`], then `RUST_LOG`, using `lookup`
    /// to resolve variables.
    #[must_use]
    pub fn with_env_override<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let directive = [LOG_ENV_VAR, RUST_LOG_VAR]
            .into_iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty());
        self.with_override(directive)
    }

    /// Returns the level used when no override applies.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the override directive, if one is set.
    #[must_use]
    pub fn directive_override(&self) -> Option<&str> {
        self.directive_override.as_deref()
    }

    /// Returns the effective filter directive.
    #[must_use]
    pub fn directive(&self) -> &str {
        self.directive_override
            .as_deref()
            .unwrap_or_else(|| self.level.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        }
    }

    #[test]
    fn verbose_count_climbs_the_ladder() {
        assert_eq!(LogLevel::from_verbose_level(0), LogLevel::Warn);
        assert_eq!(LogLevel::from_verbose_level(1), LogLevel::Info);
        assert_eq!(LogLevel::from_verbose_level(2), LogLevel::Debug);
        assert_eq!(LogLevel::from_verbose_level(3), LogLevel::Trace);
        assert_eq!(LogLevel::from_verbose_level(u8::MAX), LogLevel::Trace);
    }

    #[test]
    fn levels_are_ordered_by_detail() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn parses_level_names() {
        assert_eq!("WARNING".parse(), Ok(LogLevel::Warn));
        assert_eq!(" debug ".parse(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn project_variable_wins_over_rust_log() {
        let config = LogConfig::from_verbose_level(0)
            .with_env_override(env(&[("RUST_LOG", "info"), ("HTACL_LOG", "trace")]));
        assert_eq!(config.directive(), "trace");
    }

    #[test]
    fn rust_log_is_the_fallback() {
        let config = LogConfig::from_verbose_level(1).with_env_override(env(&[("RUST_LOG", "error")]));
        assert_eq!(config.directive(), "error");
        assert_eq!(config.level(), LogLevel::Info);
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = LogConfig::from_verbose_level(2).with_env_override(env(&[("HTACL_LOG", "  ")]));
        assert_eq!(config.directive_override(), None);
        assert_eq!(config.directive(), "debug");
    }
}

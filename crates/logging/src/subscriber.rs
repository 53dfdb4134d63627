//! Subscriber installation for the binary.

use tracing_subscriber::EnvFilter;

use crate::LogConfig;

/// Builds the event filter for `config`.
///
/// An override directive that fails to parse is dropped in favour of the
/// level default, so a typo in `HTACL_LOG` never silences warnings.
#[must_use]
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    config
        .directive_override()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(config.level().as_str()))
}

/// Installs a `fmt` subscriber writing to stderr.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(config: &LogConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;

    #[test]
    fn filter_follows_level() {
        let filter = build_filter(&LogConfig::new(LogLevel::Debug));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn override_replaces_level() {
        let config =
            LogConfig::new(LogLevel::Warn).with_override(Some("htacl::acl=trace".to_owned()));
        assert_eq!(build_filter(&config).to_string(), "htacl::acl=trace");
    }

    #[test]
    fn unparsable_override_falls_back() {
        let config = LogConfig::new(LogLevel::Info).with_override(Some("htacl=loud".to_owned()));
        assert_eq!(build_filter(&config).to_string(), "info");
    }

    #[test]
    fn second_install_is_reported() {
        let config = LogConfig::default();
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}

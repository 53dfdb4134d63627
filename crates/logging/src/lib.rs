#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the binary's `-v` count and log environment variables into
//! an installed `tracing` subscriber. Library crates only emit events; this
//! crate is the one place that decides where they go.
//!
//! # Design
//!
//! - [`LogLevel`] is the verbosity ladder: no `-v` shows warnings, each `-v`
//!   unlocks one more level up to `trace`.
//! - [`LogConfig`] pairs that default with an optional directive override
//!   taken from [`LOG_ENV_VAR`] or `RUST_LOG`.
//! - With the `tracing` feature, `init_tracing` installs a `fmt` subscriber
//!   writing to stderr, filtered by an `EnvFilter` built from the config.
//!   The `trace_acl!` and `trace_scan!` macros emit events under the targets
//!   the ACL engine uses.
//!
//! # Invariants
//!
//! - An override directive always wins over the `-v` count.
//! - Installing a subscriber twice is not an error; the second call reports
//!   `false` and leaves the first subscriber in place.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, LogLevel};
//!
//! let config = LogConfig::from_verbose_level(2);
//! assert_eq!(config.level(), LogLevel::Debug);
//! assert_eq!(config.directive(), "debug");
//!
//! let config = config.with_override(Some("htacl::acl=trace".to_owned()));
//! assert_eq!(config.directive(), "htacl::acl=trace");
//! ```

mod verbosity;

pub use verbosity::{LOG_ENV_VAR, LogConfig, LogLevel, ParseLogLevelError};

#[cfg(feature = "tracing")]
mod subscriber;
#[cfg(feature = "tracing")]
mod tracing_macros;

#[cfg(feature = "tracing")]
pub use subscriber::{build_filter, init_tracing};

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;

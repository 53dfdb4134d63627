use std::io;
use std::path::{Path, PathBuf};

use groupdef::GroupDefError;
use thiserror::Error;

/// Error returned by ACL path resolution and scanning.
///
/// An absent ACL file and a scan without a qualifying record are not errors;
/// both surface as `Ok(None)`.
#[derive(Debug, Error)]
pub enum AclError {
    /// A required input was missing or empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The ACL content ended inside a record whose template matched, so the
    /// cursor could not be resynchronized.
    #[error("truncated ACL record at line {line} of {}", origin(.path.as_deref()))]
    PartialRead {
        /// ACL file, when the source came from disk.
        path: Option<PathBuf>,
        /// Line on which the truncated record starts.
        line: usize,
    },

    /// Opening or reading the ACL failed for a reason other than absence.
    #[error("failed to read ACL {}: {source}", origin(.path.as_deref()))]
    Io {
        /// ACL file, when the source came from disk.
        path: Option<PathBuf>,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The principal field of a matching record does not parse. The record
    /// has been consumed, so scanning may continue.
    #[error("invalid principal list at line {line} of {}: {source}", origin(.path.as_deref()))]
    InvalidGroupDefinition {
        /// ACL file, when the source came from disk.
        path: Option<PathBuf>,
        /// Line on which the offending record starts.
        line: usize,
        /// Parser diagnostic.
        #[source]
        source: GroupDefError,
    },
}

impl AclError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Returns `true` for failures that leave the answer unknown
    /// ([`PartialRead`](Self::PartialRead) and [`Io`](Self::Io)).
    ///
    /// Callers use this to decide between failing open and failing closed.
    #[must_use]
    pub const fn is_read_failure(&self) -> bool {
        matches!(self, Self::PartialRead { .. } | Self::Io { .. })
    }

    /// Returns the ACL line the error refers to, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::PartialRead { line, .. } | Self::InvalidGroupDefinition { line, .. } => {
                Some(*line)
            }
            Self::InvalidArgument(_) | Self::Io { .. } => None,
        }
    }
}

fn origin(path: Option<&Path>) -> String {
    path.map_or_else(|| "<stream>".to_owned(), |path| path.display().to_string())
}

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use records::RecordReader;
use template::TemplateMatcher;

use crate::{AclError, AclResolver, debug_acl};

/// Position of the record cursor between scan calls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cursor {
    /// The next call starts reading at a record boundary.
    Ready,
    /// End of input was reached; every later call reports no entry.
    Exhausted,
    /// Reading stopped inside the record starting at `line`.
    Halted { line: usize },
}

/// An open ACL file with a forward-only record cursor.
///
/// One handle serves one access check. Scans take `&mut self`, so a handle
/// is never scanned from two places at once; independent checks open
/// independent handles and share nothing.
#[derive(Debug)]
pub struct AclSource<R = BufReader<File>> {
    pub(crate) reader: RecordReader<R>,
    pub(crate) matcher: TemplateMatcher,
    pub(crate) path: Option<PathBuf>,
    pub(crate) cursor: Cursor,
}

impl AclSource {
    pub(crate) fn from_file(file: File, path: PathBuf, matcher: TemplateMatcher) -> Self {
        Self {
            reader: RecordReader::new(BufReader::new(file)),
            matcher,
            path: Some(path),
            cursor: Cursor::Ready,
        }
    }
}

impl<R: BufRead> AclSource<R> {
    /// Scans ACL text from an arbitrary reader.
    pub const fn from_reader(reader: R, matcher: TemplateMatcher) -> Self {
        Self {
            reader: RecordReader::new(reader),
            matcher,
            path: None,
            cursor: Cursor::Ready,
        }
    }

    /// Returns the ACL file path when the source was opened from disk.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns `true` once a scan has run off the end of the records.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }

    /// Releases the handle.
    ///
    /// Closing between scan steps is always safe; pending records are simply
    /// never read.
    pub fn close(self) {
        debug_acl::trace_acl_closed(self.path.as_deref(), self.reader.line());
    }
}

/// Opens the ACL file governing `resource_path` with the default
/// configuration.
///
/// Returns `Ok(None)` when no ACL file exists.
pub fn open_acl_source(resource_path: &str) -> Result<Option<AclSource>, AclError> {
    AclResolver::default().open(resource_path)
}

/// Closes `source`; a no-op when no ACL was found.
pub fn close_acl_source<R: BufRead>(source: Option<AclSource<R>>) {
    if let Some(source) = source {
        source.close();
    }
}

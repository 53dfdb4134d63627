//! Scan tracing for ACL lookups.
//!
//! Every function emits one structured `tracing` event under the
//! `htacl::acl` target when the `tracing` feature is enabled, and compiles to
//! an empty inline function otherwise.

use std::path::Path;

/// Target name for tracing events.
#[cfg(feature = "tracing")]
pub const ACL_TARGET: &str = "htacl::acl";

/// Traces a successfully opened ACL file.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_acl_opened(path: &Path) {
    tracing::debug!(target: ACL_TARGET, path = %path.display(), "acl_opened");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_acl_opened(_path: &Path) {}

/// Traces a lookup for which no ACL file exists.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_acl_absent(path: &Path) {
    tracing::debug!(target: ACL_TARGET, path = %path.display(), "acl_absent");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_acl_absent(_path: &Path) {}

/// Traces release of a handle and how far its cursor got.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_acl_closed(path: Option<&Path>, line: usize) {
    tracing::trace!(
        target: ACL_TARGET,
        path = ?path,
        line = line,
        "acl_closed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_acl_closed(_path: Option<&Path>, _line: usize) {}

/// Traces the comparison of one record's template with the base filename.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_template_evaluate(line: usize, template: &str, name: &str, matched: bool) {
    tracing::trace!(
        target: ACL_TARGET,
        line = line,
        template = %template,
        name = %name,
        matched = matched,
        "template_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_template_evaluate(_line: usize, _template: &str, _name: &str, _matched: bool) {}

/// Traces whether a matching record allows the requested method.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_method_check(line: usize, method: &str, accepted: bool) {
    tracing::debug!(
        target: ACL_TARGET,
        line = line,
        method = %method,
        accepted = accepted,
        "method_check"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_method_check(_line: usize, _method: &str, _accepted: bool) {}

/// Traces a record skipped because a field is missing or not UTF-8.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_malformed_record(line: usize, reason: &str) {
    tracing::warn!(
        target: ACL_TARGET,
        line = line,
        reason = %reason,
        "malformed_record_skipped"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_malformed_record(_line: usize, _reason: &str) {}

/// Traces the record handed back to the caller.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_entry_returned(line: usize, template: &str, name: &str) {
    tracing::info!(
        target: ACL_TARGET,
        line = line,
        template = %template,
        name = %name,
        "entry_returned"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_entry_returned(_line: usize, _template: &str, _name: &str) {}

/// Traces a cursor running off the end of the ACL.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_scan_exhausted(name: &str, line: usize) {
    tracing::debug!(target: ACL_TARGET, name = %name, line = line, "scan_exhausted");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_scan_exhausted(_name: &str, _line: usize) {}

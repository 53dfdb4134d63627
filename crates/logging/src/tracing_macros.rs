//! Target-specific wrappers around the `tracing` macros.

/// Emits an info event under the `htacl::acl` target.
///
/// ```
/// logging::trace_acl!(path = "/srv/.www_acl", "ACL opened");
/// ```
#[macro_export]
macro_rules! trace_acl {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "htacl::acl", $($arg)*)
    };
}

/// Emits a debug event under the `htacl::scan` target.
///
/// ```
/// logging::trace_scan!(line = 3, "record skipped");
/// ```
#[macro_export]
macro_rules! trace_scan {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!(target: "htacl::scan", $($arg)*)
    };
}

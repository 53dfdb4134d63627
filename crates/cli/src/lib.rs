#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `htacl` command: given a resource path it locates the
//! governing ACL file, scans it and prints the principals allowed to perform a
//! method, or with `--full` every record whose template covers the resource.
//!
//! # Design
//!
//! [`run`] accepts an argument iterator together with handles for standard
//! output and error and returns the process exit code, so the binary's `main`
//! stays a one-liner and tests drive the whole command in memory.
//! [`run_with_env`] additionally takes the environment lookup, letting tests
//! exercise `HTACL_TEMPLATE_CASE` and `HTACL_ACL_NAME` without touching the
//! process environment. Options are parsed with a `clap` builder command;
//! command-line flags take precedence over environment variables, which take
//! precedence over built-in defaults.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | at least one entry printed |
//! | 1 | no ACL file, or no qualifying entry |
//! | 2 | usage or argument error |
//! | 3 | read failure: truncated ACL, I/O error, unparsable principal list |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cli::run(["htacl", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("htacl "));
//! assert!(stderr.is_empty());
//! ```

mod arguments;
mod command;
mod env;
mod execute;
mod output;

use std::ffi::OsString;
use std::io::Write;

pub use arguments::{OutputFormat, ParsedArgs, parse_args};
pub use env::{ACL_NAME_ENV, TEMPLATE_CASE_ENV};
pub use execute::ExitStatus;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Program name used in diagnostics and when `argv` is empty.
const PROGRAM_NAME: &str = "htacl";

/// Runs the command with the process environment.
///
/// Returns the exit code the process should terminate with.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    run_with_env(arguments, |name| std::env::var(name).ok(), stdout, stderr)
}

/// Runs the command, resolving environment variables through `env`.
pub fn run_with_env<I, S, F, Out, Err>(
    arguments: I,
    env: F,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    F: Fn(&str) -> Option<String>,
    Out: Write,
    Err: Write,
{
    let status = match parse_args(arguments) {
        Ok(parsed) => execute::execute(&parsed, &env, stdout, stderr),
        Err(error) => {
            let rendered = error.to_string();
            let _ = write!(stderr, "{rendered}");
            if !rendered.ends_with('\n') {
                let _ = writeln!(stderr);
            }
            ExitStatus::Usage
        }
    };
    status.code()
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    std::process::ExitCode::from(clamped as u8)
}

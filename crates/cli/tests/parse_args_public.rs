//! The argument parser as seen by embedders of the `cli` crate.

use std::ffi::OsString;

use cli::{OutputFormat, ParsedArgs, parse_args};

#[test]
fn bare_path_uses_defaults() {
    let parsed = parse_args(["htacl", "docs/index.html"]).expect("parse");
    assert_eq!(
        parsed,
        ParsedArgs {
            path: Some(OsString::from("docs/index.html")),
            ..ParsedArgs::default()
        }
    );
}

#[test]
fn verbosity_accumulates() {
    let parsed = parse_args(["htacl", "-v", "--verbose", "-v", "a"]).expect("parse");
    assert_eq!(parsed.verbosity, 3);
}

#[test]
fn json_selects_json_output() {
    let parsed = parse_args(["htacl", "--json", "a"]).expect("parse");
    assert_eq!(parsed.format, OutputFormat::Json);
}

#[test]
fn method_requires_a_value() {
    assert!(parse_args(["htacl", "a", "--method"]).is_err());
}

#[test]
fn help_and_version_parse_without_path() {
    assert!(parse_args(["htacl", "-h"]).expect("parse").show_help);
    assert!(parse_args(["htacl", "--version"]).expect("parse").show_version);
}

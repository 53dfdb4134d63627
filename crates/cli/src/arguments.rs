use std::ffi::OsString;

use crate::PROGRAM_NAME;
use crate::command::clap_command;

/// How results are written to standard output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Parsed command-line arguments.
///
/// Fields are `None` when the option was not given, so environment defaults
/// can be layered underneath.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedArgs {
    /// `--help` / `-h`
    pub show_help: bool,
    /// `--version` / `-V`
    pub show_version: bool,
    /// `--method` / `-m`, as typed.
    pub method: Option<String>,
    /// `--all`
    pub all: bool,
    /// `--full`
    pub full: bool,
    /// `--ignore-case` / `-i`
    pub ignore_case: bool,
    /// `--acl-name`
    pub acl_name: Option<String>,
    /// `--json`
    pub format: OutputFormat,
    /// Number of `-v` occurrences.
    pub verbosity: u8,
    /// The resource path operand.
    pub path: Option<OsString>,
}

/// Parses `arguments`, where the first item is the program name.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let format = if matches.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        method: matches.remove_one::<String>("method"),
        all: matches.get_flag("all"),
        full: matches.get_flag("full"),
        ignore_case: matches.get_flag("ignore-case"),
        acl_name: matches.remove_one::<String>("acl-name"),
        format,
        verbosity: matches.get_count("verbose"),
        path: matches.remove_one::<OsString>("path"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_options_unset() {
        let parsed = parse_args(["htacl", "/srv/index.html"]).expect("parse");
        assert_eq!(parsed.method, None);
        assert_eq!(parsed.acl_name, None);
        assert_eq!(parsed.format, OutputFormat::Text);
        assert_eq!(parsed.verbosity, 0);
        assert_eq!(parsed.path, Some(OsString::from("/srv/index.html")));
    }

    #[test]
    fn short_options_are_recognised() {
        let parsed = parse_args(["htacl", "-i", "-m", "put", "-vv", "a.html"]).expect("parse");
        assert!(parsed.ignore_case);
        assert_eq!(parsed.method.as_deref(), Some("put"));
        assert_eq!(parsed.verbosity, 2);
    }

    #[test]
    fn long_options_are_recognised() {
        let parsed = parse_args([
            "htacl",
            "--full",
            "--all",
            "--json",
            "--acl-name=.htacl",
            "a.html",
        ])
        .expect("parse");
        assert!(parsed.full);
        assert!(parsed.all);
        assert_eq!(parsed.format, OutputFormat::Json);
        assert_eq!(parsed.acl_name.as_deref(), Some(".htacl"));
    }

    #[test]
    fn empty_argv_is_tolerated() {
        let parsed = parse_args(Vec::<OsString>::new()).expect("parse");
        assert_eq!(parsed.path, None);
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(parse_args(["htacl", "--recursive", "a.html"]).is_err());
    }

    #[test]
    fn second_operand_is_an_error() {
        assert!(parse_args(["htacl", "a.html", "b.html"]).is_err());
    }
}

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};

use crate::PROGRAM_NAME;

/// Deterministic help text describing every recognised option.
const HELP_TEXT: &str = concat!(
    "Usage: htacl [OPTIONS] <PATH>\n",
    "\n",
    "Look up the principals allowed to access PATH according to the\n",
    "per-directory ACL file next to it.\n",
    "\n",
    "Options:\n",
    "  -m, --method <METHOD>  Method to authorize (default GET).\n",
    "      --all              List every qualifying entry, not just the first.\n",
    "      --full             Show whole records whose template covers PATH,\n",
    "                         whatever methods they allow.\n",
    "  -i, --ignore-case      Match templates without regard to letter case.\n",
    "      --acl-name <NAME>  ACL filename (default .www_acl).\n",
    "      --json             Print one JSON object per entry.\n",
    "  -v, --verbose          Increase log verbosity (repeatable).\n",
    "  -h, --help             Show this help message and exit.\n",
    "  -V, --version          Output version information and exit.\n",
    "\n",
    "Environment:\n",
    "  HTACL_TEMPLATE_CASE    'sensitive' or 'insensitive' when -i is absent.\n",
    "  HTACL_ACL_NAME         ACL filename when --acl-name is absent.\n",
    "  HTACL_LOG, RUST_LOG    Log filter directive, overriding -v.\n",
    "\n",
    "Exit status is 0 when an entry was printed, 1 when no ACL file or no\n",
    "qualifying entry exists, 2 on usage errors and 3 on read failures.\n",
);

pub(crate) fn render_help() -> &'static str {
    HELP_TEXT
}

pub(crate) fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .short('m')
                .value_name("METHOD")
                .help("Method to authorize.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("List every qualifying entry.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .help("Show whole records, ignoring --method.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-case")
                .long("ignore-case")
                .short('i')
                .help("Match templates without regard to letter case.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("acl-name")
                .long("acl-name")
                .value_name("NAME")
                .help("ACL filename.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON object per entry.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Resource path to look up.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
}

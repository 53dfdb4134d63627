use std::io::{BufRead, Write};

use acl::{AclConfig, AclEntry, AclError, AclResolver, AclSource, CasePolicy, Method};
use logging::{LogConfig, trace_acl, trace_scan};

use crate::command::{render_help, render_version};
use crate::env::{env_acl_name, env_case_policy};
use crate::output::write_entry;
use crate::{PROGRAM_NAME, ParsedArgs};

/// Outcome of one invocation, mapped onto the process exit code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExitStatus {
    /// At least one entry was printed (or help/version was shown).
    Found,
    /// No ACL file governs the path, or no record qualified.
    NoMatch,
    /// The command line or configuration was unusable.
    Usage,
    /// The ACL could not be read to a definite answer.
    ReadFailure,
}

impl ExitStatus {
    /// Returns the numeric exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Found => 0,
            Self::NoMatch => 1,
            Self::Usage => 2,
            Self::ReadFailure => 3,
        }
    }

    fn from_error(error: &AclError) -> Self {
        match error {
            AclError::InvalidArgument(_) => Self::Usage,
            AclError::PartialRead { .. }
            | AclError::Io { .. }
            | AclError::InvalidGroupDefinition { .. } => Self::ReadFailure,
        }
    }
}

/// A fully resolved lookup request.
struct Lookup {
    resolver: AclResolver,
    resource: String,
    method: Option<Method>,
    all: bool,
}

pub(crate) fn execute<F, Out, Err>(
    parsed: &ParsedArgs,
    env: &F,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitStatus
where
    F: Fn(&str) -> Option<String>,
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        return emit(stdout, render_help());
    }
    if parsed.show_version {
        return emit(stdout, &render_version());
    }

    logging::init_tracing(&LogConfig::from_verbose_level(parsed.verbosity).with_env_override(env));

    let lookup = match prepare(parsed, env) {
        Ok(lookup) => lookup,
        Err(message) => {
            diagnose(stderr, &message);
            return ExitStatus::Usage;
        }
    };

    let source = match lookup.resolver.open(&lookup.resource) {
        Ok(Some(source)) => source,
        Ok(None) => {
            trace_acl!(resource = %lookup.resource, "no ACL file governs the resource");
            return ExitStatus::NoMatch;
        }
        Err(error) => {
            diagnose(stderr, &error.to_string());
            return ExitStatus::from_error(&error);
        }
    };

    let status = print_entries(source, &lookup, parsed, stdout, stderr);
    trace_scan!(status = ?status, "lookup finished");
    status
}

fn prepare<F>(parsed: &ParsedArgs, env: &F) -> Result<Lookup, String>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(path) = parsed.path.as_ref() else {
        return Err("missing resource path (see --help)".to_owned());
    };
    let Some(resource) = path.to_str() else {
        return Err(format!(
            "resource path '{}' is not valid UTF-8",
            path.to_string_lossy()
        ));
    };

    let method = if parsed.full {
        None
    } else {
        let text = parsed.method.as_deref().unwrap_or(Method::GET.as_str());
        Some(text.parse::<Method>().map_err(|error| error.to_string())?)
    };

    let case_policy = if parsed.ignore_case {
        CasePolicy::Insensitive
    } else {
        env_case_policy(env)?.unwrap_or_default()
    };

    let mut config = AclConfig::new().with_case_policy(case_policy);
    if let Some(name) = parsed.acl_name.clone().or_else(|| env_acl_name(env)) {
        config = config.with_acl_file_name(name);
    }
    let resolver = AclResolver::new(config).map_err(|error| error.to_string())?;

    Ok(Lookup {
        resolver,
        resource: resource.to_owned(),
        method,
        all: parsed.all,
    })
}

fn print_entries<R, Out, Err>(
    mut source: AclSource<R>,
    lookup: &Lookup,
    parsed: &ParsedArgs,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitStatus
where
    R: BufRead,
    Out: Write,
    Err: Write,
{
    let mut printed = 0_usize;
    let status = loop {
        let step = match lookup.method.as_ref() {
            Some(method) => source.find_matching_entry(&lookup.resource, method),
            None => source.find_full_entry(&lookup.resource),
        };

        let entry: AclEntry = match step {
            Ok(Some(entry)) => entry,
            Ok(None) => break None,
            Err(error) => {
                diagnose(stderr, &error.to_string());
                break Some(ExitStatus::from_error(&error));
            }
        };

        if let Err(error) = write_entry(
            stdout,
            parsed.format,
            source.path(),
            &entry,
            lookup.method.as_ref(),
        ) {
            diagnose(stderr, &format!("failed to write output: {error}"));
            break Some(ExitStatus::ReadFailure);
        }
        printed += 1;

        if !lookup.all {
            break None;
        }
    };
    let _ = stdout.flush();
    source.close();

    status.unwrap_or(if printed > 0 {
        ExitStatus::Found
    } else {
        ExitStatus::NoMatch
    })
}

fn emit<Out: Write>(stdout: &mut Out, text: &str) -> ExitStatus {
    match stdout.write_all(text.as_bytes()) {
        Ok(()) => ExitStatus::Found,
        Err(_) => ExitStatus::ReadFailure,
    }
}

fn diagnose<Err: Write>(stderr: &mut Err, message: &str) {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
}

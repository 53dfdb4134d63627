use std::fmt;

use globset::{GlobBuilder, GlobMatcher};

use crate::CasePolicy;

/// Error produced when a template is not a valid glob expression.
#[derive(Debug)]
pub struct TemplateError {
    template: String,
    source: globset::Error,
}

impl TemplateError {
    /// Returns the offending template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to compile ACL template '{}': {}",
            self.template, self.source
        )
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Clone, Debug)]
enum Compiled {
    Glob(GlobMatcher),
    Literal,
}

/// A single compiled ACL template.
#[derive(Clone, Debug)]
pub struct Template {
    text: String,
    case: CasePolicy,
    compiled: Compiled,
}

impl Template {
    /// Compiles `text` as a glob under the given case policy.
    pub fn compile(text: &str, case: CasePolicy) -> Result<Self, TemplateError> {
        let glob = GlobBuilder::new(text)
            .literal_separator(true)
            .backslash_escape(true)
            .case_insensitive(case.is_insensitive())
            .build()
            .map_err(|source| TemplateError {
                template: text.to_owned(),
                source,
            })?;
        Ok(Self {
            text: text.to_owned(),
            case,
            compiled: Compiled::Glob(glob.compile_matcher()),
        })
    }

    /// Compiles `text`, falling back to literal comparison when it is not a
    /// valid glob.
    #[must_use]
    pub fn lenient(text: &str, case: CasePolicy) -> Self {
        Self::compile(text, case).unwrap_or_else(|_| Self {
            text: text.to_owned(),
            case,
            compiled: Compiled::Literal,
        })
    }

    /// Returns the template text as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` when the template compiled as a glob.
    #[must_use]
    pub const fn is_glob(&self) -> bool {
        matches!(self.compiled, Compiled::Glob(_))
    }

    /// Returns `true` if `name` is covered by the template.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        match &self.compiled {
            Compiled::Glob(matcher) => matcher.is_match(name),
            Compiled::Literal if self.case.is_insensitive() => {
                self.text.to_lowercase() == name.to_lowercase()
            }
            Compiled::Literal => self.text == name,
        }
    }
}

use crate::{CasePolicy, Template};

/// Compares ACL templates against base filenames.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TemplateMatcher {
    case: CasePolicy,
}

impl TemplateMatcher {
    /// Creates a matcher using `case` for every comparison.
    #[must_use]
    pub const fn new(case: CasePolicy) -> Self {
        Self { case }
    }

    /// Returns the configured case policy.
    #[must_use]
    pub const fn case_policy(self) -> CasePolicy {
        self.case
    }

    /// Returns `true` when `template` covers `name`.
    #[must_use]
    pub fn matches(self, template: &str, name: &str) -> bool {
        if template == name {
            return true;
        }
        Template::lenient(template, self.case).is_match(name)
    }
}

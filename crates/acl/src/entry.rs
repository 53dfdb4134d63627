use std::fmt;

use groupdef::GroupDef;

use crate::MethodSet;

/// A complete ACL record as returned by a full-entry lookup.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AclEntry {
    template: String,
    methods: MethodSet,
    group: GroupDef,
    line: usize,
}

impl AclEntry {
    pub(crate) const fn new(template: String, methods: MethodSet, group: GroupDef, line: usize) -> Self {
        Self {
            template,
            methods,
            group,
            line,
        }
    }

    /// Returns the record's template as written.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the record's methods, upper-cased and deduplicated.
    #[must_use]
    pub const fn methods(&self) -> &MethodSet {
        &self.methods
    }

    /// Returns the parsed principal list.
    #[must_use]
    pub const fn group(&self) -> &GroupDef {
        &self.group
    }

    /// Returns the line on which the record starts.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Consumes the entry, keeping only the principal list.
    #[must_use]
    pub fn into_group(self) -> GroupDef {
        self.group
    }

    /// Splits the entry into its method set and principal list.
    #[must_use]
    pub fn into_parts(self) -> (MethodSet, GroupDef) {
        (self.methods, self.group)
    }
}

impl fmt::Display for AclEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} : {}", self.template, self.methods, self.group)
    }
}

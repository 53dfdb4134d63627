use std::fmt;

/// Boundary that ended a field read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Terminator {
    /// The field delimiter (`:`); another field of the same record follows.
    Field,
    /// The record terminator; it is still unread.
    Record,
    /// End of input.
    Eof,
}

impl Terminator {
    /// Returns `true` when more fields of the same record follow.
    #[must_use]
    pub const fn has_next_field(self) -> bool {
        matches!(self, Self::Field)
    }
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Field => "field separator",
            Self::Record => "end of record",
            Self::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// One trimmed field together with the boundary that ended it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    text: String,
    terminator: Terminator,
}

impl Field {
    pub(crate) const fn new(text: String, terminator: Terminator) -> Self {
        Self { text, terminator }
    }

    /// Returns the field text with surrounding blanks removed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the boundary that ended the field.
    #[must_use]
    pub const fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Consumes the field and returns its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

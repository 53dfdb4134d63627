use std::io;

use thiserror::Error;

/// Error produced while reading or parsing a principal list.
#[derive(Debug, Error)]
pub enum GroupDefError {
    /// A token appeared where the grammar does not allow it.
    #[error("unexpected {found} at offset {offset}")]
    Unexpected {
        /// Human readable description of the token.
        found: String,
        /// Byte offset of the token within the principal text.
        offset: usize,
    },
    /// A `(` was never closed.
    #[error("unclosed '(' at offset {offset}")]
    UnclosedParen {
        /// Byte offset of the opening parenthesis.
        offset: usize,
    },
    /// A list item had no names, e.g. `alice,,bob` or `()`.
    #[error("empty item at offset {offset}")]
    EmptyItem {
        /// Byte offset where a name was expected.
        offset: usize,
    },
    /// An `@` was not followed by an address.
    #[error("missing address after '@' at offset {offset}")]
    MissingAddress {
        /// Byte offset of the `@`.
        offset: usize,
    },
    /// The underlying record reader failed.
    #[error("failed to read principal list: {0}")]
    Io(#[from] io::Error),
}

impl GroupDefError {
    /// Returns the byte offset of a syntax error, or `None` for I/O failures.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Unexpected { offset, .. }
            | Self::UnclosedParen { offset }
            | Self::EmptyItem { offset }
            | Self::MissingAddress { offset } => Some(*offset),
            Self::Io(_) => None,
        }
    }
}

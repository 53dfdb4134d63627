#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `records` reads the colon-delimited, line-oriented text format shared by
//! per-directory access control files and group files:
//!
//! ```text
//! template : method, method, ... : principal, principal, ...
//! ```
//!
//! # Design
//!
//! [`RecordReader`] wraps any [`std::io::BufRead`] and exposes a forward-only
//! cursor. Callers pull one field at a time with
//! [`read_field`](RecordReader::read_field), comma-separated lists with
//! [`read_list`](RecordReader::read_list), the raw tail of a record with
//! [`read_rest_of_record`](RecordReader::read_rest_of_record), and discard the
//! remainder of a record with
//! [`advance_to_next_record`](RecordReader::advance_to_next_record).
//!
//! # Invariants
//!
//! - Fields end at `:`, at the record terminator (`\n`), or at end of input.
//!   The returned [`Terminator`] says which.
//! - A record terminator that ends a field is left unread so a subsequent
//!   `advance_to_next_record` consumes exactly that record.
//! - `#` starts a comment that runs to the end of the line. Blank and
//!   comment-only lines never produce records.
//! - Leading and trailing blanks (space, tab, carriage return) are trimmed from
//!   every field and list item. Buffers grow as needed; there is no length cap.
//!
//! # Errors
//!
//! All operations return [`std::io::Error`] from the underlying reader.
//! Decoded content that is not valid UTF-8 is reported as
//! [`std::io::ErrorKind::InvalidData`] once the item has been consumed, so the
//! cursor can still move on to the next record.
//! [`read_field_bytes`](RecordReader::read_field_bytes) skips decoding.
//!
//! # Examples
//!
//! ```
//! use records::{RecordReader, Terminator};
//!
//! let mut reader = RecordReader::new("*.html : get, PUT : alice\n".as_bytes());
//! assert!(!reader.at_eof().unwrap());
//!
//! let template = reader.read_field().unwrap();
//! assert_eq!(template.text(), "*.html");
//! assert_eq!(template.terminator(), Terminator::Field);
//!
//! let (methods, end) = reader.read_list().unwrap();
//! assert_eq!(methods, ["get", "PUT"]);
//! assert_eq!(end, Terminator::Field);
//!
//! assert!(!reader.advance_to_next_record().unwrap());
//! ```

mod field;
mod reader;

pub use field::{Field, Terminator};
pub use reader::RecordReader;

/// Separates the fields of one record.
pub const FIELD_SEPARATOR: u8 = b':';

/// Separates the items of a list field.
pub const LIST_SEPARATOR: u8 = b',';

/// Ends a record.
pub const RECORD_SEPARATOR: u8 = b'\n';

/// Starts a comment running to the end of the line.
pub const COMMENT_MARKER: u8 = b'#';

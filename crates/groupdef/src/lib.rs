#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `groupdef` parses the principal lists that appear on the right-hand side of
//! group file entries and as the last field of ACL records:
//!
//! ```text
//! alice, staff, bob@*.cern.ch, (carol, dave)@(128.141.*.*, *.cern.ch)
//! ```
//!
//! # Grammar
//!
//! ```text
//! group_def   ::= item ( ',' item )*
//! item        ::= user_def [ '@' address_def ]
//! user_def    ::= NAME | '(' NAME ( ',' NAME )* ')'
//! address_def ::= ADDRESS | '(' ADDRESS ( ',' ADDRESS )* ')'
//! ```
//!
//! Names may refer to users or to groups defined elsewhere; this crate does
//! not tell them apart and does not resolve group references. Addresses are
//! kept as written (`128.141.*.*`, `*.cern.ch`) for a later address check.
//!
//! # Errors
//!
//! [`GroupDefError`] carries the byte offset of the offending token.
//! [`parse_group_def`] always consumes the rest of the current record, even
//! when the text fails to parse, so a record-oriented caller stays in sync.
//!
//! # Examples
//!
//! ```
//! use groupdef::GroupDef;
//!
//! let group: GroupDef = "alice, (bob, carol)@*.cern.ch".parse().unwrap();
//! assert_eq!(group.items().len(), 2);
//! assert_eq!(group.principals().collect::<Vec<_>>(), ["alice", "bob", "carol"]);
//! assert_eq!(group.to_string(), "alice, (bob, carol)@*.cern.ch");
//! ```

mod error;
mod lexer;
mod model;
mod parser;

pub use error::GroupDefError;
pub use model::{GroupDef, GroupItem};
pub use parser::parse_group_def;

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `acl` answers one question for the request-handling layer of an HTTP
//! server: which principals may perform a given method on a given resource?
//! The answer comes from a per-directory access control file (by default
//! `.www_acl`) placed next to the resource:
//!
//! ```text
//! template : method, method, ... : principal, principal, ...
//! ```
//!
//! # Design
//!
//! - [`resolve_acl_path`] maps a resource path to the ACL file governing it.
//!   The mapping is pure and returns a fresh [`std::path::PathBuf`] per call.
//! - [`AclResolver`] carries deployment configuration ([`AclConfig`]): the ACL
//!   filename and the template [`CasePolicy`].
//! - [`AclSource`] is an open ACL file. It owns a forward-only cursor over the
//!   records; [`AclSource::find_first_matching_entry`] and
//!   [`AclSource::find_full_entry`] resume where the previous call stopped,
//!   so repeated calls enumerate every qualifying record in file order.
//! - Every result ([`groupdef::GroupDef`], [`AclEntry`]) is a freshly
//!   allocated value owned by the caller. The engine keeps no "last result".
//!
//! # Invariants
//!
//! - Templates are matched against the resource's base filename only.
//! - In first-match mode a record qualifies when its template matches **and**
//!   its method list contains the requested method. A template match with the
//!   wrong method does not stop the scan.
//! - In full-entry mode the method list is ignored for matching and returned
//!   whole, upper-cased.
//! - Once a cursor reports exhaustion it keeps doing so.
//!
//! # Errors
//!
//! A missing ACL file is not an error: [`AclResolver::open`] returns
//! `Ok(None)`. Likewise a scan that finds nothing returns `Ok(None)`.
//! [`AclError`] covers invalid arguments, truncated records
//! ([`AclError::PartialRead`]), I/O failures and unparsable principal lists.
//! The engine never picks a fail-open or fail-closed posture on its own.
//!
//! # Examples
//!
//! ```
//! use acl::{AclSource, Method, TemplateMatcher};
//!
//! let text = "*.html : GET : ari, timbl\n*.html : get, put : robert\n";
//! let mut source = AclSource::from_reader(text.as_bytes(), TemplateMatcher::default());
//!
//! let first = source
//!     .find_first_matching_entry("/docs/index.html", &Method::PUT)
//!     .unwrap()
//!     .expect("second record grants PUT");
//! assert_eq!(first.principals().collect::<Vec<_>>(), ["robert"]);
//!
//! assert!(source
//!     .find_first_matching_entry("/docs/index.html", &Method::PUT)
//!     .unwrap()
//!     .is_none());
//! source.close();
//! ```

mod config;
pub mod debug_acl;
mod entry;
mod error;
mod iter;
mod method;
mod path;
mod scanner;
mod source;

pub use config::{AclConfig, AclResolver};
pub use entry::AclEntry;
pub use error::AclError;
pub use groupdef::{GroupDef, GroupItem};
pub use iter::{Entries, Grants};
pub use method::{Method, MethodSet};
pub use path::{ACL_FILE_NAME, base_name, resolve_acl_path};
pub use source::{AclSource, close_acl_source, open_acl_source};
pub use template::{CasePolicy, TemplateMatcher};

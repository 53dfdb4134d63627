#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `template` decides whether an access control template such as `*.html`
//! covers a resource's base filename. Templates use glob syntax (`*`, `?`,
//! `[...]`, `{a,b}`) compiled through [`globset`]; `*` never crosses a `/`.
//!
//! # Design
//!
//! - [`CasePolicy`] is a runtime setting chosen once per deployment and
//!   carried by the matcher. There is no compile-time platform switch.
//! - [`Template`] is a single compiled template. Text that is not a valid glob
//!   (an unterminated `[` for instance) degrades to a literal comparison
//!   rather than failing the lookup.
//! - [`TemplateMatcher`] is the cheap, copyable entry point used by the ACL
//!   scanner.
//!
//! # Compatibility
//!
//! Only `*` is special in older ACL files. Here `?`, `[...]` and `{a,b}` are
//! wildcards too, so a template written as `what?.html` also covers
//! `whatx.html`, and `[draft].html` covers `d.html`. Prefix a metacharacter
//! with `\` to match it literally: `what\?.html` covers only `what?.html`.
//!
//! # Examples
//!
//! ```
//! use template::{CasePolicy, TemplateMatcher};
//!
//! let exact = TemplateMatcher::new(CasePolicy::Sensitive);
//! assert!(exact.matches("*.html", "index.html"));
//! assert!(!exact.matches("*.html", "INDEX.HTML"));
//!
//! let folded = TemplateMatcher::new(CasePolicy::Insensitive);
//! assert!(folded.matches("*.html", "INDEX.HTML"));
//! ```

mod case;
mod matcher;
mod template;

pub use case::{CasePolicy, ParseCasePolicyError};
pub use matcher::TemplateMatcher;
pub use template::{Template, TemplateError};

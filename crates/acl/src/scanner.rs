//! The record scanning state machine behind the two lookup modes.

use std::io::{self, BufRead};

use groupdef::{GroupDef, GroupDefError, parse_group_def};
use records::Terminator;

use crate::source::Cursor;
use crate::{AclEntry, AclError, AclSource, Method, MethodSet, base_name, debug_acl};

impl<R: BufRead> AclSource<R> {
    /// Returns the principals of the next record that matches the base
    /// filename of `resource_path` and allows `method`.
    ///
    /// Scanning resumes right after the record returned by the previous call,
    /// so calling this until it yields `Ok(None)` visits every qualifying
    /// record in file order. A record whose template matches but whose method
    /// list lacks `method` is passed over.
    ///
    /// # Errors
    ///
    /// - [`AclError::InvalidArgument`] when `resource_path` is empty.
    /// - [`AclError::PartialRead`] when the content ends inside a matching
    ///   record; the handle stays halted afterwards.
    /// - [`AclError::Io`] when reading fails; the handle stays halted.
    /// - [`AclError::InvalidGroupDefinition`] when a qualifying record's
    ///   principal list does not parse or is not UTF-8; the record is consumed
    ///   and scanning may continue.
    ///
    /// A record whose template or method list is not UTF-8 is skipped like
    /// any other malformed record.
    pub fn find_first_matching_entry(
        &mut self,
        resource_path: &str,
        method: &Method,
    ) -> Result<Option<GroupDef>, AclError> {
        Ok(self
            .scan(resource_path, Some(method))?
            .map(AclEntry::into_group))
    }

    /// Like [`find_first_matching_entry`](Self::find_first_matching_entry),
    /// but returns the whole record, including its template, method set and
    /// line number.
    pub fn find_matching_entry(
        &mut self,
        resource_path: &str,
        method: &Method,
    ) -> Result<Option<AclEntry>, AclError> {
        self.scan(resource_path, Some(method))
    }

    /// Returns the next record whose template matches the base filename of
    /// `resource_path`, whatever methods it allows.
    ///
    /// The returned entry carries the record's full, upper-cased method set.
    /// Errors are the same as for
    /// [`find_first_matching_entry`](Self::find_first_matching_entry).
    pub fn find_full_entry(&mut self, resource_path: &str) -> Result<Option<AclEntry>, AclError> {
        self.scan(resource_path, None)
    }

    fn scan(
        &mut self,
        resource_path: &str,
        wanted: Option<&Method>,
    ) -> Result<Option<AclEntry>, AclError> {
        if resource_path.is_empty() {
            return Err(AclError::invalid_argument("resource path is empty"));
        }

        match self.cursor {
            Cursor::Ready => {}
            Cursor::Exhausted => return Ok(None),
            Cursor::Halted { line } => return Err(self.partial_read(line)),
        }

        let name = base_name(resource_path);
        match self.next_entry(name, wanted) {
            Ok(Some(entry)) => {
                debug_acl::trace_entry_returned(entry.line(), entry.template(), name);
                Ok(Some(entry))
            }
            Ok(None) => {
                debug_acl::trace_scan_exhausted(name, self.reader.line());
                self.cursor = Cursor::Exhausted;
                Ok(None)
            }
            Err(error) => {
                if error.is_read_failure() {
                    self.cursor = Cursor::Halted {
                        line: error.line().unwrap_or_else(|| self.reader.line()),
                    };
                }
                Err(error)
            }
        }
    }

    fn next_entry(
        &mut self,
        name: &str,
        wanted: Option<&Method>,
    ) -> Result<Option<AclEntry>, AclError> {
        loop {
            if self.reader.at_eof().map_err(|source| self.io_error(source))? {
                return Ok(None);
            }
            let line = self.reader.line();

            let (raw, terminator) = self
                .reader
                .read_field_bytes()
                .map_err(|source| self.io_error(source))?;
            let Ok(template) = String::from_utf8(raw) else {
                debug_acl::trace_malformed_record(line, "template is not UTF-8");
                self.skip_record()?;
                continue;
            };
            let matched = self.matcher.matches(&template, name);
            debug_acl::trace_template_evaluate(line, &template, name, matched);
            if !matched {
                self.skip_record()?;
                continue;
            }

            if !self.field_boundary(terminator, line, "no method list")? {
                continue;
            }

            let (tokens, end) = match self.reader.read_list() {
                Ok(list) => list,
                Err(error) if error.kind() == io::ErrorKind::InvalidData => {
                    debug_acl::trace_malformed_record(line, "method list is not UTF-8");
                    self.skip_record()?;
                    continue;
                }
                Err(source) => return Err(self.io_error(source)),
            };
            if !self.field_boundary(end, line, "no principal list")? {
                continue;
            }

            let methods: MethodSet = tokens
                .iter()
                .filter_map(|token| Method::from_token(token))
                .collect();

            if let Some(method) = wanted {
                let accepted = methods.contains(method);
                debug_acl::trace_method_check(line, method.as_str(), accepted);
                if !accepted {
                    self.skip_record()?;
                    continue;
                }
            }

            let group = parse_group_def(&mut self.reader).map_err(|error| match error {
                GroupDefError::Io(source) if source.kind() != io::ErrorKind::InvalidData => {
                    self.io_error(source)
                }
                source => AclError::InvalidGroupDefinition {
                    path: self.path.clone(),
                    line,
                    source,
                },
            })?;

            return Ok(Some(AclEntry::new(
                template,
                methods,
                group,
                line,
            )));
        }
    }

    /// Checks that a field of a matching record ended at `:`.
    ///
    /// Returns `Ok(false)` after skipping a record that ended early, and
    /// [`AclError::PartialRead`] when the input itself ended.
    fn field_boundary(
        &mut self,
        terminator: Terminator,
        line: usize,
        reason: &str,
    ) -> Result<bool, AclError> {
        match terminator {
            Terminator::Field => Ok(true),
            Terminator::Record => {
                debug_acl::trace_malformed_record(line, reason);
                self.skip_record()?;
                Ok(false)
            }
            Terminator::Eof => Err(self.partial_read(line)),
        }
    }

    fn skip_record(&mut self) -> Result<(), AclError> {
        self.reader
            .advance_to_next_record()
            .map(drop)
            .map_err(|source| self.io_error(source))
    }

    fn partial_read(&self, line: usize) -> AclError {
        AclError::PartialRead {
            path: self.path.clone(),
            line,
        }
    }

    fn io_error(&self, source: io::Error) -> AclError {
        AclError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

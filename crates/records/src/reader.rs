use std::io::{self, BufRead};

use memchr::memchr;

use crate::{COMMENT_MARKER, FIELD_SEPARATOR, Field, LIST_SEPARATOR, RECORD_SEPARATOR, Terminator};

/// Why a single item read stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Stop {
    /// A list separator; only produced while reading lists.
    Item,
    End(Terminator),
}

/// Forward-only reader over colon-delimited records.
///
/// The reader tracks the 1-based line number of its current position so
/// callers can attach locations to diagnostics.
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    line: usize,
}

impl<R: BufRead> RecordReader<R> {
    /// Wraps `inner`, positioned at the start of line 1.
    pub const fn new(inner: R) -> Self {
        Self { inner, line: 1 }
    }

    /// Returns the line number of the current position.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns a reference to the underlying reader.
    pub const fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the wrapper and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Skips blank and comment-only lines and reports whether input remains.
    ///
    /// Call this at a record boundary; a `false` result leaves the cursor on
    /// the first byte of the next record.
    pub fn at_eof(&mut self) -> io::Result<bool> {
        loop {
            self.skip_blanks()?;
            match self.peek()? {
                None => return Ok(true),
                Some(RECORD_SEPARATOR) => self.bump(RECORD_SEPARATOR),
                Some(COMMENT_MARKER) => self.skip_to_line_end()?,
                Some(_) => return Ok(false),
            }
        }
    }

    /// Reads the next field of the current record.
    ///
    /// A `:` that ends the field is consumed. A record terminator is left in
    /// place.
    pub fn read_field(&mut self) -> io::Result<Field> {
        let (bytes, terminator) = self.read_field_bytes()?;
        Ok(Field::new(into_text(bytes)?, terminator))
    }

    /// Reads the next field of the current record without decoding it.
    ///
    /// Positioning is identical to [`read_field`](Self::read_field). Content
    /// that is not valid UTF-8 is returned as is, so the caller can pass over
    /// the record with [`advance_to_next_record`](Self::advance_to_next_record).
    pub fn read_field_bytes(&mut self) -> io::Result<(Vec<u8>, Terminator)> {
        let (bytes, stop) = self.read_item(false)?;
        match stop {
            Stop::End(terminator) => Ok((bytes, terminator)),
            Stop::Item => unreachable!("list separators are data outside lists"),
        }
    }

    /// Reads a comma-separated list field.
    ///
    /// Empty items are dropped. The returned terminator is the boundary that
    /// ended the whole list.
    pub fn read_list(&mut self) -> io::Result<(Vec<String>, Terminator)> {
        let mut items = Vec::new();
        loop {
            let (bytes, stop) = self.read_item(true)?;
            if !bytes.is_empty() {
                items.push(into_text(bytes)?);
            }
            if let Stop::End(terminator) = stop {
                return Ok((items, terminator));
            }
        }
    }

    /// Returns the unparsed remainder of the current record.
    ///
    /// The record terminator is consumed, so the cursor ends on the next
    /// record boundary. Comments are stripped.
    pub fn read_rest_of_record(&mut self) -> io::Result<(String, Terminator)> {
        let mut bytes = Vec::new();
        let terminator = loop {
            let Some(byte) = self.peek()? else {
                break Terminator::Eof;
            };
            match byte {
                RECORD_SEPARATOR => {
                    self.bump(byte);
                    break Terminator::Record;
                }
                COMMENT_MARKER => self.skip_to_line_end()?,
                _ => {
                    self.bump(byte);
                    bytes.push(byte);
                }
            }
        };

        let start = bytes
            .iter()
            .position(|&byte| !is_blank(byte))
            .unwrap_or(bytes.len());
        bytes.drain(..start);
        trim_trailing_blanks(&mut bytes);
        Ok((into_text(bytes)?, terminator))
    }

    /// Discards the rest of the current record, including its terminator.
    ///
    /// Returns `false` when no further record exists.
    pub fn advance_to_next_record(&mut self) -> io::Result<bool> {
        self.skip_to_line_end()?;
        if self.peek()? == Some(RECORD_SEPARATOR) {
            self.bump(RECORD_SEPARATOR);
        }
        Ok(!self.at_eof()?)
    }

    fn read_item(&mut self, list: bool) -> io::Result<(Vec<u8>, Stop)> {
        self.skip_blanks()?;

        let mut bytes = Vec::new();
        let stop = loop {
            let Some(byte) = self.peek()? else {
                break Stop::End(Terminator::Eof);
            };
            match byte {
                RECORD_SEPARATOR => break Stop::End(Terminator::Record),
                COMMENT_MARKER => {
                    self.skip_to_line_end()?;
                    break Stop::End(Terminator::Record);
                }
                FIELD_SEPARATOR => {
                    self.bump(byte);
                    break Stop::End(Terminator::Field);
                }
                LIST_SEPARATOR if list => {
                    self.bump(byte);
                    break Stop::Item;
                }
                _ => {
                    self.bump(byte);
                    bytes.push(byte);
                }
            }
        };

        trim_trailing_blanks(&mut bytes);
        Ok((bytes, stop))
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }
    }

    fn bump(&mut self, byte: u8) {
        self.inner.consume(1);
        if byte == RECORD_SEPARATOR {
            self.line += 1;
        }
    }

    fn skip_blanks(&mut self) -> io::Result<()> {
        while let Some(byte) = self.peek()? {
            if !is_blank(byte) {
                break;
            }
            self.bump(byte);
        }
        Ok(())
    }

    /// Consumes everything up to, but not including, the next record terminator.
    fn skip_to_line_end(&mut self) -> io::Result<()> {
        loop {
            let (consumed, found) = {
                let buf = match self.inner.fill_buf() {
                    Ok(buf) => buf,
                    Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                    Err(error) => return Err(error),
                };
                if buf.is_empty() {
                    return Ok(());
                }
                match memchr(RECORD_SEPARATOR, buf) {
                    Some(position) => (position, true),
                    None => (buf.len(), false),
                }
            };
            self.inner.consume(consumed);
            if found {
                return Ok(());
            }
        }
    }
}

const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r')
}

fn trim_trailing_blanks(bytes: &mut Vec<u8>) {
    while bytes.last().is_some_and(|&byte| is_blank(byte)) {
        bytes.pop();
    }
}

fn into_text(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}

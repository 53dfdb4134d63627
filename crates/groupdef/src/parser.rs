use std::io::BufRead;

use records::RecordReader;

use crate::lexer::{Lexer, Spanned, Token};
use crate::{GroupDef, GroupDefError, GroupItem};

/// Parses the rest of the current record as a principal list.
///
/// The record terminator is consumed whether or not parsing succeeds.
pub fn parse_group_def<R: BufRead>(reader: &mut RecordReader<R>) -> Result<GroupDef, GroupDefError> {
    let (text, _) = reader.read_rest_of_record()?;
    parse_str(&text)
}

pub(crate) fn parse_str(text: &str) -> Result<GroupDef, GroupDefError> {
    Parser::new(text).group_def()
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Spanned<'a>>,
}

impl<'a> Parser<'a> {
    const fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexer::new(text),
            peeked: None,
        }
    }

    fn peek(&mut self) -> Spanned<'a> {
        *self.peeked.get_or_insert_with(|| self.lexer.next_token())
    }

    fn bump(&mut self) -> Spanned<'a> {
        self.peeked
            .take()
            .unwrap_or_else(|| self.lexer.next_token())
    }

    fn group_def(&mut self) -> Result<GroupDef, GroupDefError> {
        let mut items = Vec::new();
        if self.peek().token == Token::End {
            return Ok(GroupDef::from_items(items));
        }

        loop {
            items.push(self.item()?);
            let next = self.bump();
            match next.token {
                Token::End => return Ok(GroupDef::from_items(items)),
                Token::Comma => {}
                _ => return Err(unexpected(next)),
            }
        }
    }

    fn item(&mut self) -> Result<GroupItem, GroupDefError> {
        let users = self.names(None)?;
        let addresses = if self.peek().token == Token::At {
            let at = self.bump();
            self.names(Some(at.offset))?
        } else {
            Vec::new()
        };
        Ok(GroupItem::new(users, addresses))
    }

    /// Reads a single name or a parenthesized name list. `after_at` holds the
    /// offset of the `@` when an address part is expected.
    fn names(&mut self, after_at: Option<usize>) -> Result<Vec<String>, GroupDefError> {
        let first = self.bump();
        match first.token {
            Token::Name(name) => Ok(vec![name.to_owned()]),
            Token::Open => self.parenthesized(first.offset),
            Token::Comma | Token::End => Err(match after_at {
                Some(offset) => GroupDefError::MissingAddress { offset },
                None => GroupDefError::EmptyItem {
                    offset: first.offset,
                },
            }),
            _ => Err(unexpected(first)),
        }
    }

    fn parenthesized(&mut self, open: usize) -> Result<Vec<String>, GroupDefError> {
        let mut names = Vec::new();
        loop {
            let name = self.bump();
            match name.token {
                Token::Name(text) => names.push(text.to_owned()),
                Token::Close | Token::Comma => {
                    return Err(GroupDefError::EmptyItem {
                        offset: name.offset,
                    });
                }
                Token::End => return Err(GroupDefError::UnclosedParen { offset: open }),
                _ => return Err(unexpected(name)),
            }

            let separator = self.bump();
            match separator.token {
                Token::Comma => {}
                Token::Close => return Ok(names),
                Token::End => return Err(GroupDefError::UnclosedParen { offset: open }),
                _ => return Err(unexpected(separator)),
            }
        }
    }
}

fn unexpected(spanned: Spanned<'_>) -> GroupDefError {
    GroupDefError::Unexpected {
        found: spanned.token.describe(),
        offset: spanned.offset,
    }
}

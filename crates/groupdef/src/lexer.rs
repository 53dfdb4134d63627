//! Tokenizer for principal lists.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Token<'a> {
    Name(&'a str),
    Comma,
    Open,
    Close,
    At,
    Stray(char),
    End,
}

impl Token<'_> {
    pub(crate) fn describe(self) -> String {
        match self {
            Self::Name(name) => format!("name '{name}'"),
            Self::Comma => "','".to_owned(),
            Self::Open => "'('".to_owned(),
            Self::Close => "')'".to_owned(),
            Self::At => "'@'".to_owned(),
            Self::Stray(ch) => format!("'{ch}'"),
            Self::End => "end of list".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Spanned<'a> {
    pub(crate) token: Token<'a>,
    pub(crate) offset: usize,
}

pub(crate) struct Lexer<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) const fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    pub(crate) fn next_token(&mut self) -> Spanned<'a> {
        let rest = &self.text[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
        let offset = self.position;

        let Some(ch) = trimmed.chars().next() else {
            return Spanned {
                token: Token::End,
                offset,
            };
        };

        let token = match ch {
            ',' => Token::Comma,
            '(' => Token::Open,
            ')' => Token::Close,
            '@' => Token::At,
            ':' => Token::Stray(ch),
            _ => {
                let length = trimmed
                    .find(|c: char| c.is_whitespace() || is_delimiter(c))
                    .unwrap_or(trimmed.len());
                self.position += length;
                return Spanned {
                    token: Token::Name(&trimmed[..length]),
                    offset,
                };
            }
        };
        self.position += ch.len_utf8();
        Spanned { token, offset }
    }
}

const fn is_delimiter(ch: char) -> bool {
    matches!(ch, ',' | '(' | ')' | '@' | ':')
}

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::AclError;

/// A request method in canonical upper-case form.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Method(Cow<'static, str>);

impl Method {
    /// `GET`
    pub const GET: Self = Self(Cow::Borrowed("GET"));
    /// `HEAD`
    pub const HEAD: Self = Self(Cow::Borrowed("HEAD"));
    /// `POST`
    pub const POST: Self = Self(Cow::Borrowed("POST"));
    /// `PUT`
    pub const PUT: Self = Self(Cow::Borrowed("PUT"));
    /// `DELETE`
    pub const DELETE: Self = Self(Cow::Borrowed("DELETE"));

    /// Canonicalizes a token read from an ACL method list.
    ///
    /// Returns `None` for a blank token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(Self(Cow::Owned(token.to_ascii_uppercase())))
    }

    /// Returns the canonical spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Method {
    type Err = AclError;

    /// Parses a caller-supplied method. Blank text and text containing list
    /// or field separators are rejected.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let token = text.trim();
        if token.is_empty() {
            return Err(AclError::invalid_argument("method is empty"));
        }
        if token.contains(|ch: char| ch.is_whitespace() || matches!(ch, ':' | ',' | '#')) {
            return Err(AclError::invalid_argument(format!(
                "method '{token}' is not a single token"
            )));
        }
        Ok(Self(Cow::Owned(token.to_ascii_uppercase())))
    }
}

/// Methods allowed by one ACL record, in first-seen order without duplicates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct MethodSet {
    methods: Vec<Method>,
}

impl MethodSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            methods: Vec::new(),
        }
    }

    /// Adds `method` unless it is already present. Returns `true` if added.
    pub fn insert(&mut self, method: Method) -> bool {
        if self.contains(&method) {
            return false;
        }
        self.methods.push(method);
        true
    }

    /// Returns `true` if `method` is in the set.
    #[must_use]
    pub fn contains(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    /// Returns the number of distinct methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` when no method is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Iterates over the methods in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Method> {
        self.methods.iter()
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        let mut set = Self::new();
        for method in iter {
            set.insert(method);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MethodSet {
    type Item = &'a Method;
    type IntoIter = std::slice::Iter<'a, Method>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, method) in self.methods.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            method.fmt(f)?;
        }
        Ok(())
    }
}

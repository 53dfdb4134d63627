use std::fmt;
use std::str::FromStr;

use crate::GroupDefError;

/// One item of a principal list: names, optionally restricted to addresses.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupItem {
    users: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    addresses: Vec<String>,
}

impl GroupItem {
    /// Creates an item from user/group names and address templates.
    #[must_use]
    pub fn new<U, A>(users: U, addresses: A) -> Self
    where
        U: IntoIterator,
        U::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            users: users.into_iter().map(Into::into).collect(),
            addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the user and group names of the item.
    #[must_use]
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Returns the address templates the item is restricted to.
    #[must_use]
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// Returns `true` when the item carries no `@` restriction.
    #[must_use]
    pub fn applies_from_any_address(&self) -> bool {
        self.addresses.is_empty()
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    match names {
        [single] => f.write_str(single),
        _ => write!(f, "({})", names.join(", ")),
    }
}

impl fmt::Display for GroupItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_names(f, &self.users)?;
        if !self.addresses.is_empty() {
            f.write_str("@")?;
            write_names(f, &self.addresses)?;
        }
        Ok(())
    }
}

/// Parsed principal list.
///
/// Every value is owned by whoever received it; parsing never shares storage
/// with earlier results.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupDef {
    items: Vec<GroupItem>,
}

impl GroupDef {
    /// Parses a principal list.
    pub fn parse(text: &str) -> Result<Self, GroupDefError> {
        crate::parser::parse_str(text)
    }

    /// Builds a definition from already parsed items.
    #[must_use]
    pub fn from_items(items: Vec<GroupItem>) -> Self {
        Self { items }
    }

    /// Returns the items in the order they were written.
    #[must_use]
    pub fn items(&self) -> &[GroupItem] {
        &self.items
    }

    /// Returns `true` when the definition authorizes nobody.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over every user or group name, in order of appearance.
    pub fn principals(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .flat_map(|item| item.users.iter().map(String::as_str))
    }
}

impl fmt::Display for GroupDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.fmt(f)?;
        }
        Ok(())
    }
}

impl FromStr for GroupDef {
    type Err = GroupDefError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

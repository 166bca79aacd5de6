//! The closed registry of string categories a string mark may request.

use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;

/// A kind of string content that the string generator knows how to produce.
///
/// The set is closed: validation rejects any category name outside this
/// enumeration before any generation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    Alpha,
    Alphanumeric,
    Cjk,
    Html,
    Latin1,
    Numeric,
    Utf8,
    Punctuation,
}

/// Every recognized string kind, in registry order.
pub const STRING_KINDS: [StringKind; 8] = [
    StringKind::Alpha,
    StringKind::Alphanumeric,
    StringKind::Cjk,
    StringKind::Html,
    StringKind::Latin1,
    StringKind::Numeric,
    StringKind::Utf8,
    StringKind::Punctuation,
];

impl StringKind {
    /// The registry name of this kind, as written in marks.
    pub fn as_str(&self) -> &'static str {
        match self {
            StringKind::Alpha => "alpha",
            StringKind::Alphanumeric => "alphanumeric",
            StringKind::Cjk => "cjk",
            StringKind::Html => "html",
            StringKind::Latin1 => "latin1",
            StringKind::Numeric => "numeric",
            StringKind::Utf8 => "utf8",
            StringKind::Punctuation => "punctuation",
        }
    }

    /// Look up a kind by its registry name.
    pub fn from_name(name: &str) -> Option<StringKind> {
        STRING_KINDS.iter().copied().find(|kind| kind.as_str() == name)
    }

    /// Whether `name` belongs to the registry.
    pub fn is_supported(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

impl fmt::Display for StringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringKind {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UsageError::unsupported_string_kind(s))
    }
}

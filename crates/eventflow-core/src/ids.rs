//! Identifier value objects.
//!
//! `Tag` and `AggregateId` are opaque, non-empty strings. Both follow the
//! "parse, don't validate" discipline: construction is the only place
//! emptiness is checked, so every other piece of code that holds one of
//! these can assume it is valid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a `Tag` or `AggregateId` is constructed from an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must not be empty")]
pub struct EmptyIdentifierError {
    field: &'static str,
}

/// Opaque string naming an aggregate type.
///
/// Two tags are equal iff their underlying strings are equal; there is no
/// implicit coercion between a tag and a raw string beyond the smart
/// constructor and `as_str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Construct a tag, rejecting empty strings.
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyIdentifierError> {
        let value = value.into();
        if value.is_empty() {
            return Err(EmptyIdentifierError { field: "Tag" });
        }
        Ok(Self(value))
    }

    /// Derive a tag from a type name, stripping any character outside
    /// `[A-Za-z0-9_.-]` per the identifiers contract.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        let sanitized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
            .collect();
        // A type name is never empty, and sanitizing an ASCII identifier
        // never yields an empty string either.
        Self(sanitized)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = EmptyIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

/// Opaque string identifying one aggregate instance within its tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AggregateId(String);

impl AggregateId {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyIdentifierError> {
        let value = value.into();
        if value.is_empty() {
            return Err(EmptyIdentifierError {
                field: "AggregateId",
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AggregateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AggregateId {
    type Error = EmptyIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AggregateId> for String {
    fn from(id: AggregateId) -> Self {
        id.0
    }
}

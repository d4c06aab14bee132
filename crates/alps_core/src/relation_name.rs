//! Relation name validation.
//!
//! Provides a branded type for the stable external identifier of a resource.
//! The same value is used as a URI path segment and as ALPS descriptor name,
//! so it is restricted to characters that need no percent-encoding.

use crate::{AlpsError, AlpsResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Maximum accepted length of a relation name.
pub const MAX_RELATION_NAME_LENGTH: usize = 100;

/// A validated relation name ("rel").
///
/// Relation names must:
/// - Be 1-100 characters long
/// - Contain only ASCII letters, digits, hyphens, underscores and dots
/// - Not start with a dot or a hyphen
///
/// # Examples
///
/// ```
/// use alps_core::RelationName;
///
/// let orders = RelationName::try_new("orders").unwrap();
/// assert_eq!(orders.as_str(), "orders");
///
/// assert!(RelationName::try_new("").is_err());
/// assert!(RelationName::try_new("orders/items").is_err());
/// assert!(RelationName::try_new(".hidden").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelationName(String);

impl RelationName {
    /// Create a new RelationName from a string.
    ///
    /// # Errors
    ///
    /// Returns `AlpsError::InvalidRelationName` if the value is empty, too
    /// long, contains characters outside the allowed set, or starts with a
    /// dot or hyphen.
    pub fn try_new(value: impl Into<String>) -> AlpsResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(invalid(value, "relation name cannot be empty"));
        }

        if value.len() > MAX_RELATION_NAME_LENGTH {
            let reason = format!(
                "relation name too long ({} characters, maximum {})",
                value.len(),
                MAX_RELATION_NAME_LENGTH
            );
            return Err(invalid(value, reason));
        }

        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(invalid(
                value,
                "only ASCII letters, digits, hyphens, underscores and dots are allowed",
            ));
        }

        if value.starts_with('.') || value.starts_with('-') {
            return Err(invalid(value, "relation name cannot start with '.' or '-'"));
        }

        Ok(Self(value))
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Derive a distinct relation name by appending `suffix`.
    ///
    /// When the result would exceed [`MAX_RELATION_NAME_LENGTH`] the end of
    /// this name is trimmed first. The derived name is always shorter or
    /// longer than `self`, so it never equals it. `suffix` must be non-empty
    /// and use only relation name characters.
    pub(crate) fn with_suffix(&self, suffix: &str) -> Self {
        debug_assert!(!suffix.is_empty() && suffix.len() < MAX_RELATION_NAME_LENGTH);

        let mut keep = self.0.len().min(MAX_RELATION_NAME_LENGTH - suffix.len());
        if keep + suffix.len() == self.0.len() {
            keep -= 1;
        }

        // ASCII only, so any byte index is a char boundary
        Self(format!("{}{}", &self.0[..keep], suffix))
    }
}

fn invalid(value: String, reason: impl Into<String>) -> AlpsError {
    AlpsError::InvalidRelationName {
        value,
        reason: reason.into(),
    }
}

impl TryFrom<String> for RelationName {
    type Error = AlpsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for RelationName {
    type Error = AlpsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for RelationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RelationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for RelationName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for RelationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<RelationName> for String {
    fn from(name: RelationName) -> String {
        name.0
    }
}

#[cfg(test)]
#[path = "relation_name_tests.rs"]
mod tests;

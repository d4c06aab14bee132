//! Repository registry.
//!
//! The registry enumerates the domain types currently exposed as resources.
//! Enumeration order is significant: ALPS documents list descriptors in the
//! order the registry yields them.

use crate::{AlpsError, AlpsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// Identifier of a domain type managed by a repository (e.g. `Order`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainType(String);

impl DomainType {
    /// Create a domain type identifier.
    ///
    /// # Errors
    ///
    /// Returns `AlpsError::InvalidDomainType` if the name is empty or
    /// contains whitespace.
    pub fn try_new(name: impl Into<String>) -> AlpsResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(AlpsError::InvalidDomainType {
                value: name,
                reason: "domain type cannot be empty".to_string(),
            });
        }

        if name.chars().any(char::is_whitespace) {
            return Err(AlpsError::InvalidDomainType {
                value: name,
                reason: "domain type cannot contain whitespace".to_string(),
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DomainType {
    type Error = AlpsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<DomainType> for String {
    fn from(domain_type: DomainType) -> String {
        domain_type.0
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Enumerable collection of domain types exposed as resources.
///
/// Implementations must be safe for concurrent reads; the registry is
/// shared by all requests.
pub trait RepositoryRegistry: Send + Sync {
    /// Domain types in enumeration order.
    fn domain_types(&self) -> Vec<DomainType>;
}

/// Registry backed by an ordered list.
///
/// Duplicates are kept as given; callers that need uniqueness check it
/// before constructing the registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositoryRegistry {
    domain_types: Vec<DomainType>,
}

impl InMemoryRepositoryRegistry {
    pub fn new(domain_types: impl IntoIterator<Item = DomainType>) -> Self {
        Self {
            domain_types: domain_types.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.domain_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain_types.is_empty()
    }
}

impl RepositoryRegistry for InMemoryRepositoryRegistry {
    fn domain_types(&self) -> Vec<DomainType> {
        self.domain_types.clone()
    }
}

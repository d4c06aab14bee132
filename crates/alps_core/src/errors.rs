//! ALPS domain error types.
//!
//! Errors raised while building ALPS documents, resolving resources and
//! loading the repository catalog. The HTTP layer maps these to status codes;
//! nothing in this crate knows about HTTP.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced by the ALPS domain layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlpsError {
    /// The registry exposes a domain type the mapping index has no entry for.
    ///
    /// This is a wiring defect between collaborators, not a request error.
    #[error("No resource mapping registered for domain type: {domain_type}")]
    UnmappedDomainType { domain_type: String },

    #[error("Repository not found: {name}")]
    UnknownRepository { name: String },

    #[error("Invalid relation name '{value}': {reason}")]
    InvalidRelationName { value: String, reason: String },

    #[error("Invalid domain type '{value}': {reason}")]
    InvalidDomainType { value: String, reason: String },

    #[error("Invalid base URI '{uri}': {reason}")]
    InvalidBaseUri { uri: String, reason: String },

    #[error("Failed to read catalog file: {path} - {reason}")]
    CatalogAccessError { path: String, reason: String },

    #[error("Failed to parse catalog: {reason}")]
    CatalogParseError { reason: String },

    #[error("Duplicate {kind} in catalog: {value}")]
    DuplicateCatalogEntry { kind: String, value: String },
}

/// Result type alias for ALPS domain operations.
pub type AlpsResult<T> = Result<T, AlpsError>;

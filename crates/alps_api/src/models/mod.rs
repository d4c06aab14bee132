//! HTTP response models
//!
//! This module contains the HTTP-specific types returned by handlers.
//! These types are distinct from domain types and exist only in the HTTP layer.

pub mod response;

// Re-export commonly used types
pub use response::{AlpsJson, HealthCheckResponse};

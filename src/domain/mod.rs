//! Domain layer for the Prism value-profile engine
//!
//! This module contains the value model, the question and archetype
//! catalogs, and the typed errors raised when that static data is malformed.

pub mod catalog;
pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{DomainError, DomainResult};

//! # Deckname Domain
//!
//! Business domain types and models for Deckname.
//!
//! This crate contains:
//! - PII entity types (EntityCategory, PatternMatch, AnonymizedEntity)
//! - Document input and result types
//! - The rehydration map
//! - Domain error types and Result definitions
//! - Domain constants and conversion macros
//!
//! ## Architecture
//! - No dependencies on other Deckname crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

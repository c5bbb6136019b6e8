//! Domain types and models

pub mod category;
pub mod confidence;
pub mod detection;
pub mod document;
pub mod rehydration;

pub use category::EntityCategory;
pub use confidence::ConfidenceScore;
pub use detection::{AnonymizedEntity, AnonymizedEntityBuilder, PatternMatch};
pub use document::{DocumentPage, DocumentResult, EntitySummary, PageResult};
pub use rehydration::{RehydrationEntry, RehydrationMap};

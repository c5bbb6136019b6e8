//! Redaction pipeline
//!
//! - [`allocator`]: per-category, document-scoped sequence counters
//! - [`redactor`]: splices replacement tokens into page text

pub mod allocator;
pub mod redactor;

pub use allocator::TokenAllocator;
pub use redactor::{PageRedaction, Redactor};

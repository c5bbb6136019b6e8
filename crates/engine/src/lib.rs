//! Deterministic PII detection and anonymization for German legal documents.
//!
//! # Pipeline
//!
//! [`DocumentProcessor::process`] takes extracted page text through three
//! stages:
//! - detection: every configured pattern runs against each page, fail-soft
//! - resolution: overlapping candidates collapse to a single winner per span
//! - redaction: winners become `[CATEGORY_N]` tokens, numbered per category
//!   across the whole document in reading order
//!
//! The pipeline is deterministic: the same pages with the same configuration
//! always produce the same anonymized text, entities, and tokens. The
//! rehydration map returned next to the result is the sensitive half of a
//! run and must stay inside the trust boundary.
//!
//! # Example
//!
//! ```
//! use deckname_engine::DocumentProcessor;
//!
//! let processor = DocumentProcessor::with_defaults();
//! let (result, map) = processor.process_text("Kontakt: max@firma.de")?;
//!
//! assert_eq!(result.pages[0].anonymized_text, "Kontakt: [EMAIL_1]");
//! assert_eq!(map.original_value("[EMAIL_1]"), Some("max@firma.de"));
//! # Ok::<(), deckname_engine::EngineError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod detection;
pub mod document;
pub mod error;
pub mod patterns;
pub mod redaction;

// Re-export commonly used types for convenience
// ------------------------
pub use detection::{MatchFilter, OverlapResolver, PageDetector};
pub use document::{restore, DocumentProcessor};
pub use error::{EngineError, EngineResult};
pub use patterns::{
    DetectionConfig, FilterConfig, PatternConfig, PatternRegistry, RegexMatcher, RegisteredPattern,
    SpanMatcher,
};
pub use redaction::{PageRedaction, Redactor, TokenAllocator};

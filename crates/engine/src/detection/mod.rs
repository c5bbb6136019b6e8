//! Detection pipeline
//!
//! - [`detector`]: runs the pattern registry against one page, fail-soft
//! - [`filter`]: drops predictable false positives for weak categories
//! - [`resolver`]: collapses overlapping candidates deterministically

pub mod detector;
pub mod filter;
pub mod resolver;

pub use detector::PageDetector;
pub use filter::MatchFilter;
pub use resolver::OverlapResolver;

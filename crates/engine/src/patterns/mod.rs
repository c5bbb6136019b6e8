//! Pattern definitions and compilation
//!
//! - [`matcher`]: the `SpanMatcher` seam plus the regex-backed implementation
//! - [`config`]: the serializable pattern table and filter settings
//! - [`registry`]: compiled, ordered pattern sets ready for detection

pub mod config;
pub mod matcher;
pub mod registry;

pub use config::{DetectionConfig, FilterConfig, PatternConfig};
pub use matcher::{RegexMatcher, SpanMatcher};
pub use registry::{PatternRegistry, RegisteredPattern};

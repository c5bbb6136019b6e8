//! Document processing
//!
//! - [`processor`]: the page-by-page anonymization pipeline
//! - [`restore`]: puts original values back for callers inside the trust
//!   boundary

pub mod processor;
pub mod restore;

pub use processor::DocumentProcessor;
pub use restore::restore;

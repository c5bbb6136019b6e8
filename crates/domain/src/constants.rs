//! Domain constants
//!
//! Centralized location for all domain-level constants used throughout the
//! anonymization pipeline.

// Document assembly
pub const PAGE_BREAK_SEPARATOR: &str = "\n\n--- PAGE BREAK ---\n\n";
pub const FIRST_PAGE_NUMBER: usize = 1;

// Token allocation
pub const FIRST_SEQUENCE_NUMBER: u64 = 1;

// Weak-category false-positive filtering
pub const DEFAULT_MIN_WEAK_MATCH_CHARS: usize = 6;

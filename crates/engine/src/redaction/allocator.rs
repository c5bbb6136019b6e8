//! Replacement token numbering
//!
//! Tokens are numbered per category across the whole document: the third
//! email in reading order is `[EMAIL_3]` no matter which page it sits on.
//! The allocator owns those counters. Each `DocumentProcessor::process` call
//! creates its own allocator, so numbering always starts fresh per document
//! and two concurrent runs can never bleed sequence numbers into each other.

use std::collections::HashMap;

use deckname_domain::types::EntityCategory;

/// Per-category sequence counters for one document run
#[derive(Debug, Clone, Default)]
pub struct TokenAllocator {
    counters: HashMap<EntityCategory, u64>,
}

impl TokenAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next sequence number for a category, starting at one.
    ///
    /// Numbers are strictly increasing per category and never reused or
    /// reset within a run.
    pub fn allocate(&mut self, category: EntityCategory) -> u64 {
        let counter = self.counters.entry(category).or_default();
        *counter += 1;
        *counter
    }

    /// How many tokens this category has received so far
    pub fn allocated(&self, category: EntityCategory) -> u64 {
        self.counters.get(&category).copied().unwrap_or(0)
    }

    /// Total tokens handed out across all categories
    pub fn total_allocated(&self) -> u64 {
        self.counters.values().sum()
    }
}

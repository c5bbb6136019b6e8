//! Rehydration map types
//!
//! The rehydration map is the sensitive half of an anonymization run: it maps
//! every issued replacement token back to the original text. It travels and
//! persists separately from `DocumentResult` and must never leave the trust
//! boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::EntityCategory;

/// One token-to-original mapping
#[derive(Clone, Serialize, Deserialize)]
pub struct RehydrationEntry {
    pub replacement_token: String,
    pub original_value: String,
    pub category: EntityCategory,
    /// Page the token was first issued on
    pub page_number: usize,
}

impl std::fmt::Debug for RehydrationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RehydrationEntry")
            .field("replacement_token", &self.replacement_token)
            .field("original_value", &"[REDACTED]")
            .field("category", &self.category)
            .field("page_number", &self.page_number)
            .finish()
    }
}

/// All token mappings for one anonymization run, keyed by replacement token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RehydrationMap {
    /// Unique id tying this map to the run that produced it
    pub map_id: String,
    pub entries: HashMap<String, RehydrationEntry>,
}

impl RehydrationMap {
    pub fn new() -> Self {
        Self { map_id: Uuid::new_v4().to_string(), entries: HashMap::new() }
    }

    /// Inserts an entry under its replacement token
    pub fn insert(&mut self, entry: RehydrationEntry) {
        self.entries.insert(entry.replacement_token.clone(), entry);
    }

    /// Looks up the entry for a replacement token
    pub fn get(&self, token: &str) -> Option<&RehydrationEntry> {
        self.entries.get(token)
    }

    /// Looks up just the original value for a replacement token
    pub fn original_value(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(|e| e.original_value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absorbs all entries of another map, keeping this map's id
    pub fn merge(&mut self, other: RehydrationMap) {
        self.entries.extend(other.entries);
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for RehydrationMap {
    fn default() -> Self {
        Self::new()
    }
}

//! Document input and result types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::EntityCategory;
use super::detection::AnonymizedEntity;
use crate::constants::PAGE_BREAK_SEPARATOR;

/// One page of extracted document text, as handed to the processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPage {
    /// 1-based page number in reading order
    pub page_number: usize,
    pub text: String,
}

impl DocumentPage {
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        Self { page_number, text: text.into() }
    }
}

/// Anonymization result for a single page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    pub page_number: usize,
    pub original_text: String,
    pub anonymized_text: String,
    /// Entities in reading order (ascending start position)
    pub entities: Vec<AnonymizedEntity>,
}

impl PageResult {
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

/// Per-category aggregate for the document summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub count: u64,
    /// German display description of the category
    pub description: String,
}

/// Anonymization result for a whole document
///
/// The combined texts join all pages with [`PAGE_BREAK_SEPARATOR`]. The
/// rehydration map is deliberately not part of this type; results are safe to
/// serialize and pass on, the map is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    pub pages: Vec<PageResult>,
    /// Categories that produced at least one entity, with counts
    pub entity_summary: BTreeMap<EntityCategory, EntitySummary>,
    pub combined_original: String,
    pub combined_anonymized: String,
    pub total_entity_count: u64,
}

impl DocumentResult {
    /// Assembles a document result from per-page results
    ///
    /// Computes the entity summary, total count, and the combined texts in
    /// page order.
    pub fn from_pages(pages: Vec<PageResult>) -> Self {
        let mut entity_summary: BTreeMap<EntityCategory, EntitySummary> = BTreeMap::new();
        let mut total_entity_count = 0u64;

        for page in &pages {
            for entity in &page.entities {
                total_entity_count += 1;
                entity_summary
                    .entry(entity.category)
                    .or_insert_with(|| EntitySummary {
                        count: 0,
                        description: entity.category.description().to_string(),
                    })
                    .count += 1;
            }
        }

        let combined_original = pages
            .iter()
            .map(|p| p.original_text.as_str())
            .collect::<Vec<_>>()
            .join(PAGE_BREAK_SEPARATOR);
        let combined_anonymized = pages
            .iter()
            .map(|p| p.anonymized_text.as_str())
            .collect::<Vec<_>>()
            .join(PAGE_BREAK_SEPARATOR);

        Self { pages, entity_summary, combined_original, combined_anonymized, total_entity_count }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
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

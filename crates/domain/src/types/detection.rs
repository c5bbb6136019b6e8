//! Detection and anonymization entity types
//!
//! `PatternMatch` is what detection produces: a raw span in one page's text,
//! classified and scored but not yet resolved against competing matches.
//! `AnonymizedEntity` is what redaction produces once a match has survived
//! overlap resolution and received its replacement token.
//!
//! Both types hold the original sensitive text in `value`, so their `Debug`
//! implementations print `[REDACTED]` instead. Log the span, never the span's
//! content.

use serde::{Deserialize, Serialize};

use super::category::EntityCategory;
use super::confidence::ConfidenceScore;

/// A single raw pattern hit inside one page's text
///
/// Positions are byte offsets into the page's UTF-8 text, half-open:
/// `start_position` is the first byte of the matched span, `end_position` the
/// first byte past it. A span never splits a UTF-8 code point.
#[derive(Clone, Serialize, Deserialize)]
pub struct PatternMatch {
    pub category: EntityCategory,
    pub value: String,
    pub start_position: usize,
    pub end_position: usize,
    pub confidence: ConfidenceScore,
    pub is_priority: bool,
    /// Position of the producing pattern in registry order, used as the final
    /// tie-break when sorting candidates
    pub registration_index: usize,
}

impl PatternMatch {
    pub fn new(
        category: EntityCategory,
        value: impl Into<String>,
        start_position: usize,
        end_position: usize,
        confidence: ConfidenceScore,
        is_priority: bool,
        registration_index: usize,
    ) -> Self {
        Self {
            category,
            value: value.into(),
            start_position,
            end_position,
            confidence,
            is_priority,
            registration_index,
        }
    }

    /// Returns the length of the matched span in bytes
    pub fn length(&self) -> usize {
        self.end_position.saturating_sub(self.start_position)
    }

    /// Checks if this match overlaps with another match
    pub fn overlaps_with(&self, other: &PatternMatch) -> bool {
        !(self.end_position <= other.start_position || other.end_position <= self.start_position)
    }
}

impl std::fmt::Debug for PatternMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternMatch")
            .field("category", &self.category)
            .field("value", &"[REDACTED]")
            .field("position", &format!("{}..{}", self.start_position, self.end_position))
            .field("confidence", &self.confidence)
            .field("is_priority", &self.is_priority)
            .field("registration_index", &self.registration_index)
            .finish()
    }
}

/// A resolved match after redaction, carrying its replacement token
///
/// # Examples
/// ```
/// use deckname_domain::types::{AnonymizedEntity, ConfidenceScore, EntityCategory};
///
/// let entity = AnonymizedEntity::builder()
///     .category(EntityCategory::Email)
///     .value("max.mustermann@firma.de")
///     .position(9, 32)
///     .replacement_token("[EMAIL_1]")
///     .page_number(1)
///     .sequence_number(1)
///     .confidence(ConfidenceScore::HIGH)
///     .build();
/// assert!(entity.is_ok());
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct AnonymizedEntity {
    pub category: EntityCategory,
    pub value: String,
    pub replacement_token: String,
    pub start_position: usize,
    pub end_position: usize,
    /// 1-based page the entity was found on
    pub page_number: usize,
    /// 1-based position in this category's document-wide reading order
    pub global_sequence_number: u64,
    pub confidence: ConfidenceScore,
}

impl AnonymizedEntity {
    /// Creates a new anonymized entity builder
    pub fn builder() -> AnonymizedEntityBuilder {
        AnonymizedEntityBuilder::default()
    }

    /// Returns the length of the original span in bytes
    pub fn length(&self) -> usize {
        self.end_position.saturating_sub(self.start_position)
    }
}

impl std::fmt::Debug for AnonymizedEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnonymizedEntity")
            .field("category", &self.category)
            .field("value", &"[REDACTED]")
            .field("replacement_token", &self.replacement_token)
            .field("position", &format!("{}..{}", self.start_position, self.end_position))
            .field("page_number", &self.page_number)
            .field("global_sequence_number", &self.global_sequence_number)
            .field("confidence", &self.confidence)
            .finish()
    }
}

/// Builder for AnonymizedEntity with validation
#[derive(Default)]
pub struct AnonymizedEntityBuilder {
    category: Option<EntityCategory>,
    value: Option<String>,
    replacement_token: Option<String>,
    start_position: Option<usize>,
    end_position: Option<usize>,
    page_number: Option<usize>,
    global_sequence_number: Option<u64>,
    confidence: Option<ConfidenceScore>,
}

impl AnonymizedEntityBuilder {
    pub fn category(mut self, category: EntityCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn value<S: Into<String>>(mut self, value: S) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn replacement_token<S: Into<String>>(mut self, token: S) -> Self {
        self.replacement_token = Some(token.into());
        self
    }

    pub fn position(mut self, start: usize, end: usize) -> Self {
        self.start_position = Some(start);
        self.end_position = Some(end);
        self
    }

    pub fn page_number(mut self, page_number: usize) -> Self {
        self.page_number = Some(page_number);
        self
    }

    pub fn sequence_number(mut self, sequence: u64) -> Self {
        self.global_sequence_number = Some(sequence);
        self
    }

    pub fn confidence(mut self, confidence: ConfidenceScore) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn build(self) -> Result<AnonymizedEntity, &'static str> {
        let category = self.category.ok_or("category is required")?;
        let value = self.value.ok_or("value is required")?;
        let replacement_token = self.replacement_token.ok_or("replacement_token is required")?;
        let start_position = self.start_position.ok_or("start_position is required")?;
        let end_position = self.end_position.ok_or("end_position is required")?;
        let page_number = self.page_number.ok_or("page_number is required")?;
        let global_sequence_number =
            self.global_sequence_number.ok_or("global_sequence_number is required")?;

        if start_position >= end_position {
            return Err("start_position must be less than end_position");
        }
        if page_number == 0 {
            return Err("page_number must be 1-based");
        }
        if global_sequence_number == 0 {
            return Err("global_sequence_number must be 1-based");
        }

        Ok(AnonymizedEntity {
            category,
            value,
            replacement_token,
            start_position,
            end_position,
            page_number,
            global_sequence_number,
            confidence: self.confidence.unwrap_or(ConfidenceScore::MEDIUM),
        })
    }
}

impl std::fmt::Debug for AnonymizedEntityBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnonymizedEntityBuilder")
            .field("category", &self.category)
            .field("value", &if self.value.is_some() { "[REDACTED]" } else { "None" })
            .field("replacement_token", &self.replacement_token)
            .field("position", &format!("{:?}..{:?}", self.start_position, self.end_position))
            .field("page_number", &self.page_number)
            .finish()
    }
}

//! Token substitution
//!
//! The redactor turns one page's resolved matches into anonymized text.
//! Sequence numbers are allocated in reading order first, then the spans
//! are spliced back to front so earlier byte offsets stay valid while
//! later ones shift. A span that does not fit the page text is a hard
//! error: silently clamping would desynchronize text and entities.

use deckname_domain::types::{AnonymizedEntity, PatternMatch, RehydrationEntry};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::redaction::allocator::TokenAllocator;

/// Everything `Redactor::apply` produces for one page
#[derive(Debug, Clone)]
pub struct PageRedaction {
    pub anonymized_text: String,
    /// Entities in reading order
    pub entities: Vec<AnonymizedEntity>,
    /// Token mappings for this page, for the document-level rehydration map
    pub rehydration_entries: Vec<RehydrationEntry>,
}

/// Applies replacement tokens to one page of text
pub struct Redactor;

impl Redactor {
    /// Redact one page.
    ///
    /// `matches` must be non-overlapping; order does not matter, allocation
    /// happens in reading order regardless. The allocator is shared across
    /// the pages of one document so sequence numbers keep counting up.
    pub fn apply(
        page_number: usize,
        text: &str,
        matches: &[PatternMatch],
        allocator: &mut TokenAllocator,
    ) -> EngineResult<PageRedaction> {
        let mut ordered: Vec<&PatternMatch> = matches.iter().collect();
        ordered.sort_by_key(|m| m.start_position);

        Self::validate_spans(page_number, text, &ordered)?;

        let mut entities = Vec::with_capacity(ordered.len());
        let mut rehydration_entries = Vec::with_capacity(ordered.len());

        for matched in &ordered {
            let sequence = allocator.allocate(matched.category);
            let token = matched.category.replacement_token(sequence);

            let entity = AnonymizedEntity::builder()
                .category(matched.category)
                .value(matched.value.clone())
                .replacement_token(token.clone())
                .position(matched.start_position, matched.end_position)
                .page_number(page_number)
                .sequence_number(sequence)
                .confidence(matched.confidence)
                .build()
                .map_err(|e| EngineError::Redaction(e.to_string()))?;

            rehydration_entries.push(RehydrationEntry {
                replacement_token: token,
                original_value: matched.value.clone(),
                category: matched.category,
                page_number,
            });
            entities.push(entity);
        }

        let mut anonymized = text.to_string();
        for entity in entities.iter().rev() {
            anonymized
                .replace_range(entity.start_position..entity.end_position, &entity.replacement_token);
        }

        debug_assert_eq!(
            anonymized.len() as i64 - text.len() as i64,
            entities
                .iter()
                .map(|e| e.replacement_token.len() as i64 - e.length() as i64)
                .sum::<i64>(),
            "length delta must equal the sum of per-entity deltas"
        );

        debug!(page = page_number, entities = entities.len(), "page redacted");
        Ok(PageRedaction { anonymized_text: anonymized, entities, rehydration_entries })
    }

    /// Rejects spans that cannot be spliced into the page text
    fn validate_spans(
        page_number: usize,
        text: &str,
        ordered: &[&PatternMatch],
    ) -> EngineResult<()> {
        for matched in ordered {
            if matched.start_position >= matched.end_position {
                return Err(EngineError::Redaction(format!(
                    "empty or inverted span {}..{} on page {}",
                    matched.start_position, matched.end_position, page_number
                )));
            }
            if matched.end_position > text.len() {
                return Err(EngineError::SpanOutOfBounds {
                    page_number,
                    start_position: matched.start_position,
                    end_position: matched.end_position,
                    text_length: text.len(),
                });
            }
            if !text.is_char_boundary(matched.start_position)
                || !text.is_char_boundary(matched.end_position)
            {
                return Err(EngineError::Redaction(format!(
                    "span {}..{} on page {} does not fall on character boundaries",
                    matched.start_position, matched.end_position, page_number
                )));
            }
        }

        for pair in ordered.windows(2) {
            if pair[1].start_position < pair[0].end_position {
                return Err(EngineError::Redaction(format!(
                    "overlapping spans {}..{} and {}..{} on page {}",
                    pair[0].start_position,
                    pair[0].end_position,
                    pair[1].start_position,
                    pair[1].end_position,
                    page_number
                )));
            }
        }

        Ok(())
    }
}

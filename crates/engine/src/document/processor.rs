//! Document-level orchestration
//!
//! One `process` call takes a document's pages through detection, overlap
//! resolution, and redaction, threading a single token allocator through
//! all pages so sequence numbers count across the whole document. The
//! allocator lives inside the call, never inside the processor, which keeps
//! the processor safe to share and reuse across documents.

use deckname_domain::constants::FIRST_PAGE_NUMBER;
use deckname_domain::errors::DomainError;
use deckname_domain::types::{DocumentPage, DocumentResult, PageResult, RehydrationMap};
use tracing::{debug, info, instrument};

use crate::detection::{OverlapResolver, PageDetector};
use crate::error::EngineResult;
use crate::patterns::DetectionConfig;
use crate::redaction::{Redactor, TokenAllocator};

/// Anonymizes whole documents page by page
#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    detector: PageDetector,
}

impl DocumentProcessor {
    pub fn new(detector: PageDetector) -> Self {
        Self { detector }
    }

    /// Processor over the built-in German pattern table
    pub fn with_defaults() -> Self {
        Self::new(PageDetector::with_defaults())
    }

    /// Processor over a validated configuration
    pub fn from_config(config: &DetectionConfig) -> EngineResult<Self> {
        Ok(Self::new(PageDetector::from_config(config)?))
    }

    /// Anonymize a document.
    ///
    /// Pages must carry 1-based, strictly increasing page numbers. An empty
    /// page is valid and passes through unchanged. The returned rehydration
    /// map holds every issued token; it is the sensitive half of the result
    /// and is returned separately so callers cannot persist it by accident
    /// alongside the anonymized text.
    #[instrument(skip_all, fields(pages = pages.len()))]
    pub fn process(
        &self,
        pages: &[DocumentPage],
    ) -> EngineResult<(DocumentResult, RehydrationMap)> {
        Self::validate_page_order(pages)?;

        let mut allocator = TokenAllocator::new();
        let mut rehydration = RehydrationMap::new();
        let mut page_results = Vec::with_capacity(pages.len());

        for page in pages {
            let candidates = self.detector.detect(&page.text);
            let resolved = OverlapResolver::resolve(candidates);
            debug!(page = page.page_number, matches = resolved.len(), "page resolved");

            let redaction =
                Redactor::apply(page.page_number, &page.text, &resolved, &mut allocator)?;

            for entry in redaction.rehydration_entries {
                rehydration.insert(entry);
            }

            page_results.push(PageResult {
                page_number: page.page_number,
                original_text: page.text.clone(),
                anonymized_text: redaction.anonymized_text,
                entities: redaction.entities,
            });
        }

        let result = DocumentResult::from_pages(page_results);
        info!(
            pages = result.page_count(),
            entities = result.total_entity_count,
            "document anonymized"
        );
        Ok((result, rehydration))
    }

    /// Anonymize a standalone piece of text as a one-page document
    pub fn process_text(&self, text: &str) -> EngineResult<(DocumentResult, RehydrationMap)> {
        self.process(&[DocumentPage::new(FIRST_PAGE_NUMBER, text)])
    }

    fn validate_page_order(pages: &[DocumentPage]) -> EngineResult<()> {
        let mut previous: Option<usize> = None;
        for page in pages {
            if page.page_number < FIRST_PAGE_NUMBER {
                return Err(DomainError::InvalidInput(format!(
                    "page numbers are 1-based, got {}",
                    page.page_number
                ))
                .into());
            }
            if let Some(previous) = previous {
                if page.page_number <= previous {
                    return Err(DomainError::InvalidInput(format!(
                        "page numbers must be strictly increasing, got {} after {}",
                        page.page_number, previous
                    ))
                    .into());
                }
            }
            previous = Some(page.page_number);
        }
        Ok(())
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

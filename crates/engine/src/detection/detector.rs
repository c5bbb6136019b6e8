//! Per-page pattern detection
//!
//! The detector runs every registered pattern against one page of text and
//! returns raw, possibly overlapping candidates. A failing matcher never
//! fails the page: it is logged and contributes zero matches, so one broken
//! pattern cannot take down detection of the remaining categories.

use std::sync::Arc;

use deckname_domain::types::PatternMatch;
use tracing::{debug, instrument, warn};

use crate::detection::filter::MatchFilter;
use crate::error::EngineResult;
use crate::patterns::{DetectionConfig, PatternRegistry};

/// Runs a pattern registry against single pages of text
#[derive(Debug, Clone)]
pub struct PageDetector {
    registry: Arc<PatternRegistry>,
    filter: MatchFilter,
}

impl PageDetector {
    pub fn new(registry: Arc<PatternRegistry>, filter: MatchFilter) -> Self {
        Self { registry, filter }
    }

    /// Detector over the built-in German pattern table
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(PatternRegistry::with_defaults()), MatchFilter::default())
    }

    /// Detector over a validated configuration
    pub fn from_config(config: &DetectionConfig) -> EngineResult<Self> {
        let registry = PatternRegistry::from_config(config)?;
        Ok(Self::new(Arc::new(registry), MatchFilter::new(config.filter.clone())))
    }

    /// Detect all candidate matches on one page.
    ///
    /// Candidates are unresolved: matches from different patterns may
    /// overlap each other. Order is pattern order, then position within each
    /// pattern.
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub fn detect(&self, text: &str) -> Vec<PatternMatch> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        let mut filtered = 0usize;

        for pattern in self.registry.list() {
            let spans = match pattern.matcher.find_spans(text) {
                Ok(spans) => spans,
                Err(e) => {
                    warn!(
                        category = %pattern.category,
                        error = %e,
                        "matcher failed, pattern contributes no matches on this page"
                    );
                    continue;
                }
            };

            for (start, end) in spans {
                if start >= end {
                    continue;
                }
                let Some(value) = text.get(start..end) else {
                    warn!(
                        category = %pattern.category,
                        start,
                        end,
                        "matcher produced an invalid span, skipping"
                    );
                    continue;
                };

                let candidate = PatternMatch::new(
                    pattern.category,
                    value,
                    start,
                    end,
                    pattern.confidence,
                    pattern.is_priority,
                    pattern.registration_index,
                );

                if self.filter.accepts(&candidate) {
                    candidates.push(candidate);
                } else {
                    filtered += 1;
                }
            }
        }

        debug!(candidates = candidates.len(), filtered, "page detection complete");
        candidates
    }
}

impl Default for PageDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

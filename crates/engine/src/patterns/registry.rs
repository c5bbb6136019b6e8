//! Pattern registry
//!
//! A registry is an ordered, immutable set of compiled patterns. Order is
//! the registration order and doubles as the final tie-break during overlap
//! resolution, so building a registry from a config preserves the table
//! order exactly.

use std::fmt;
use std::sync::Arc;

use deckname_domain::types::{ConfidenceScore, EntityCategory};

use crate::error::{EngineError, EngineResult};
use crate::patterns::config::DetectionConfig;
use crate::patterns::matcher::{RegexMatcher, SpanMatcher};

/// A compiled pattern together with its resolution metadata
#[derive(Clone)]
pub struct RegisteredPattern {
    pub category: EntityCategory,
    pub description: String,
    pub matcher: Arc<dyn SpanMatcher>,
    pub confidence: ConfidenceScore,
    pub is_priority: bool,
    /// Position within this registry, assigned at registration
    pub registration_index: usize,
}

impl fmt::Debug for RegisteredPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredPattern")
            .field("category", &self.category)
            .field("description", &self.description)
            .field("matcher", &"<matcher>")
            .field("confidence", &self.confidence)
            .field("is_priority", &self.is_priority)
            .field("registration_index", &self.registration_index)
            .finish()
    }
}

/// Ordered set of patterns a detector runs against each page
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    patterns: Vec<RegisteredPattern>,
}

impl PatternRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Build a registry from a validated configuration.
    ///
    /// Disabled patterns are skipped; a globally disabled config yields an
    /// empty registry, which detects nothing.
    pub fn from_config(config: &DetectionConfig) -> EngineResult<Self> {
        let mut registry = Self::new();

        if !config.enabled {
            return Ok(registry);
        }

        for pattern_config in config.enabled_patterns() {
            let matcher = RegexMatcher::new(&pattern_config.pattern).map_err(|e| {
                EngineError::PatternCompilation(format!(
                    "invalid pattern for {}: {}",
                    pattern_config.category, e
                ))
            })?;

            registry.register(
                pattern_config.category,
                pattern_config.description.clone(),
                Arc::new(matcher),
                pattern_config.confidence,
                pattern_config.is_priority,
            );
        }

        Ok(registry)
    }

    /// Build a registry from the built-in German pattern table
    pub fn with_defaults() -> Self {
        Self::from_config(&DetectionConfig::default())
            .expect("default pattern table should compile - this is a bug")
    }

    /// Append a pattern; it receives the next registration index
    pub fn register(
        &mut self,
        category: EntityCategory,
        description: String,
        matcher: Arc<dyn SpanMatcher>,
        confidence: ConfidenceScore,
        is_priority: bool,
    ) {
        let registration_index = self.patterns.len();
        self.patterns.push(RegisteredPattern {
            category,
            description,
            matcher,
            confidence,
            is_priority,
            registration_index,
        });
    }

    /// Registered patterns in registration order
    pub fn list(&self) -> &[RegisteredPattern] {
        &self.patterns
    }

    pub fn length(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

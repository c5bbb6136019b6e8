//! Span matching abstraction
//!
//! Detection only needs one capability from a pattern: produce the spans it
//! matches in a page. `SpanMatcher` is that seam. Keeping it a trait lets the
//! detector treat a failing matcher as a degraded pattern instead of a failed
//! page, and lets tests inject matchers that misbehave on purpose.

use regex::Regex;

use crate::error::EngineResult;

/// A compiled pattern that can report its matches in a text
///
/// Contract: the returned spans are half-open byte ranges into `text`, sorted
/// by start position, and never overlap each other. Overlaps *between*
/// different matchers are expected and resolved later.
pub trait SpanMatcher: Send + Sync {
    fn find_spans(&self, text: &str) -> EngineResult<Vec<(usize, usize)>>;
}

/// The standard regex-backed matcher
///
/// `Regex::find_iter` yields leftmost-first, non-overlapping matches, which
/// satisfies the `SpanMatcher` contract by construction.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> EngineResult<Self> {
        Ok(Self { regex: Regex::new(pattern)? })
    }

    /// Returns the source pattern string
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl SpanMatcher for RegexMatcher {
    fn find_spans(&self, text: &str) -> EngineResult<Vec<(usize, usize)>> {
        Ok(self.regex.find_iter(text).map(|m| (m.start(), m.end())).collect())
    }
}

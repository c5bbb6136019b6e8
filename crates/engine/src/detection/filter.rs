//! False-positive filtering for weak categories
//!
//! Name detection over German text is noisy: any two capitalized words look
//! like a name, including "Deutsche Bank" and sentence openers such as
//! "Diese Rechnung". The filter drops the predictable false positives for
//! categories the config marks as weak; strong categories pass through
//! untouched.

use std::collections::HashSet;

use deckname_domain::types::{EntityCategory, PatternMatch};

use crate::patterns::FilterConfig;

/// Applies [`FilterConfig`] rules to raw pattern matches
#[derive(Debug, Clone)]
pub struct MatchFilter {
    weak_categories: HashSet<EntityCategory>,
    min_match_chars: usize,
    /// Lowercased for case-insensitive comparison
    stoplist: HashSet<String>,
    leading_stopwords: HashSet<String>,
}

impl MatchFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            weak_categories: config.weak_categories.into_iter().collect(),
            min_match_chars: config.min_match_chars,
            stoplist: config.stoplist.into_iter().map(|s| s.to_lowercase()).collect(),
            leading_stopwords: config
                .leading_stopwords
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    /// Returns true if the match survives filtering.
    ///
    /// Matches from categories not listed as weak always survive. Weak
    /// matches are dropped when they are shorter than the configured
    /// minimum, span a line break, equal a stoplist phrase, or start with a
    /// leading stopword. All text comparisons are case-insensitive.
    pub fn accepts(&self, candidate: &PatternMatch) -> bool {
        if !self.weak_categories.contains(&candidate.category) {
            return true;
        }

        let value = candidate.value.as_str();

        if value.chars().count() < self.min_match_chars {
            return false;
        }

        if value.contains('\n') || value.contains('\r') {
            return false;
        }

        let lowered = value.to_lowercase();
        if self.stoplist.contains(&lowered) {
            return false;
        }

        if let Some(first_word) = value.split_whitespace().next() {
            if self.leading_stopwords.contains(&first_word.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

impl Default for MatchFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckname_domain::types::ConfidenceScore;

    fn name_match(value: &str) -> PatternMatch {
        PatternMatch::new(
            EntityCategory::PersonName,
            value,
            0,
            value.len(),
            ConfidenceScore::new(0.6),
            false,
            0,
        )
    }

    fn email_match(value: &str) -> PatternMatch {
        PatternMatch::new(
            EntityCategory::Email,
            value,
            0,
            value.len(),
            ConfidenceScore::new(0.95),
            true,
            2,
        )
    }

    #[test]
    fn test_plausible_name_survives() {
        let filter = MatchFilter::default();
        assert!(filter.accepts(&name_match("Max Mustermann")));
        assert!(filter.accepts(&name_match("Frau Erika Musterfrau")));
    }

    #[test]
    fn test_short_name_is_dropped() {
        let filter = MatchFilter::default();
        // Five characters, below the default minimum of six
        assert!(!filter.accepts(&name_match("Al Ba")));
    }

    #[test]
    fn test_minimum_counts_characters_not_bytes() {
        let filter = MatchFilter::default();
        // Six characters but more bytes due to umlauts
        assert!(filter.accepts(&name_match("Öz Gür")));
    }

    #[test]
    fn test_line_break_is_dropped() {
        let filter = MatchFilter::default();
        assert!(!filter.accepts(&name_match("Betreff\nAnlage")));
    }

    #[test]
    fn test_stoplist_phrase_is_dropped_case_insensitively() {
        let filter = MatchFilter::default();
        assert!(!filter.accepts(&name_match("Deutsche Bank")));
        assert!(!filter.accepts(&name_match("DEUTSCHE BANK")));
    }

    #[test]
    fn test_leading_stopword_is_dropped() {
        let filter = MatchFilter::default();
        assert!(!filter.accepts(&name_match("Diese Rechnung")));
        assert!(!filter.accepts(&name_match("Mit Schreiben")));
    }

    #[test]
    fn test_strong_category_bypasses_all_rules() {
        let filter = MatchFilter::default();
        // Shorter than the minimum, but EMAIL is not a weak category
        assert!(filter.accepts(&email_match("a@b.c")));
    }

    #[test]
    fn test_empty_weak_list_disables_filtering() {
        let filter = MatchFilter::new(FilterConfig {
            weak_categories: Vec::new(),
            ..FilterConfig::default()
        });
        assert!(filter.accepts(&name_match("Al Ba")));
    }
}

//! Detection configuration
//!
//! The pattern table, priority flags, confidences, and false-positive filter
//! settings all live here, in one serializable structure. `Default` builds
//! the German legal-document table the engine ships with; deployments can
//! load a reviewed variant from disk instead. Nothing outside this module
//! hardcodes per-category policy.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use deckname_domain::constants::DEFAULT_MIN_WEAK_MATCH_CHARS;
use deckname_domain::types::{ConfidenceScore, EntityCategory};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Email pattern (unicode-aware, matches international domains)
pub const EMAIL_PATTERN: &str = r"(?u)\b[\p{L}\p{N}._%+-]+@[\p{L}\p{N}.-]+\.[\p{L}]{2,}\b";

/// German phone numbers: +49 prefix or leading 0, with space/dash/slash groups
pub const PHONE_PATTERN: &str = r"(?:\+49[ \-/]?|\b0)[1-9]\d{1,4}(?:[ \-/]?\d{3,10}){1,2}\b";

/// German IBAN, grouped (DE89 3704 ...) or compact (DE89370400440532013000)
pub const IBAN_PATTERN: &str = r"\bDE\d{2}(?:[ ]?\d{4}){4}[ ]?\d{2}\b";

/// Five-digit postal code
pub const POSTAL_CODE_PATTERN: &str = r"\b\d{5}\b";

/// Court case numbers such as "4 C 123/23" or "2 BvR 1234/20"
pub const CASE_NUMBER_PATTERN: &str = r"\b\d{1,3}\s?[A-Za-z]{1,4}\s?\d{1,5}/\d{2}\b";

/// Tax numbers (12/345/67890) and the 11-digit Steuer-ID
pub const TAX_ID_PATTERN: &str = r"\b(?:\d{2,3}/\d{3}/\d{4,5}|\d{11})\b";

/// Euro amounts with German thousands/decimal separators
pub const AMOUNT_PATTERN: &str = r"\b\d{1,3}(?:\.\d{3})*(?:,\d{2})?\s?(?:€|EUR\b|Euro\b)";

/// Street addresses (Musterstraße 12, optionally with ", 10115 Berlin")
pub const STREET_ADDRESS_PATTERN: &str = r"\b[A-ZÄÖÜ][a-zäöüß]+(?:straße|strasse|weg|allee|platz|gasse|ring|damm|ufer|(?:er)?\s(?:Straße|Strasse|Weg|Allee|Platz|Gasse|Ring|Damm|Ufer))\s\d{1,4}[a-z]?(?:,\s?\d{5}\s[A-ZÄÖÜ][a-zäöüß]+)?";

/// Person names: two capitalized words, optionally preceded by a salutation
pub const PERSON_NAME_PATTERN: &str = r"\b(?:(?:Herr(?:n)?|Frau|Dr|Prof)\.?\s)?[A-ZÄÖÜ][a-zäöüß]+\s[A-ZÄÖÜ][a-zäöüß]+(?:-[A-ZÄÖÜ][a-zäöüß]+)?\b";

/// One entry of the pattern table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    pub category: EntityCategory,
    pub pattern: String,
    pub description: String,
    pub confidence: ConfidenceScore,
    pub is_priority: bool,
    pub enabled: bool,
}

/// False-positive filter settings for weak categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Categories the filter applies to at all
    pub weak_categories: Vec<EntityCategory>,
    /// Matches shorter than this many characters are dropped
    pub min_match_chars: usize,
    /// Phrases that are never a match (compared case-insensitively, whole
    /// match against whole phrase)
    pub stoplist: Vec<String>,
    /// Function words that disqualify a match when they are its first word
    pub leading_stopwords: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            weak_categories: vec![EntityCategory::PersonName],
            min_match_chars: DEFAULT_MIN_WEAK_MATCH_CHARS,
            stoplist: vec![
                "Bundesrepublik Deutschland".to_string(),
                "Deutsche Bahn".to_string(),
                "Deutsche Bank".to_string(),
                "Deutsche Post".to_string(),
                "Deutsche Telekom".to_string(),
                "Europäische Union".to_string(),
                "Einschreiben Rückschein".to_string(),
            ],
            leading_stopwords: vec![
                "Der".to_string(),
                "Die".to_string(),
                "Das".to_string(),
                "Dem".to_string(),
                "Den".to_string(),
                "Des".to_string(),
                "Ein".to_string(),
                "Eine".to_string(),
                "Einem".to_string(),
                "Einen".to_string(),
                "Einer".to_string(),
                "Eines".to_string(),
                "Im".to_string(),
                "Am".to_string(),
                "Beim".to_string(),
                "Vom".to_string(),
                "Zum".to_string(),
                "Zur".to_string(),
                "Mit".to_string(),
                "Nach".to_string(),
                "Laut".to_string(),
                "Gegen".to_string(),
                "Ohne".to_string(),
                "Diese".to_string(),
                "Dieser".to_string(),
                "Dieses".to_string(),
                "Ihre".to_string(),
                "Unsere".to_string(),
            ],
        }
    }
}

/// Full detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub version: String,
    pub enabled: bool,
    /// Pattern table in registration order; order is semantic, it breaks
    /// resolution ties
    pub patterns: Vec<PatternConfig>,
    pub filter: FilterConfig,
    pub last_modified: DateTime<Utc>,
    pub modified_by: String,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        let patterns = vec![
            PatternConfig {
                category: EntityCategory::PersonName,
                pattern: PERSON_NAME_PATTERN.to_string(),
                description: "Personennamen (zwei großgeschriebene Wörter, optional mit Anrede)"
                    .to_string(),
                confidence: ConfidenceScore::new(0.6),
                is_priority: false,
                enabled: true,
            },
            PatternConfig {
                category: EntityCategory::Phone,
                pattern: PHONE_PATTERN.to_string(),
                description: "Deutsche Telefonnummern (Festnetz und Mobilfunk)".to_string(),
                confidence: ConfidenceScore::new(0.85),
                is_priority: true,
                enabled: true,
            },
            PatternConfig {
                category: EntityCategory::Email,
                pattern: EMAIL_PATTERN.to_string(),
                description: "E-Mail-Adressen".to_string(),
                confidence: ConfidenceScore::new(0.95),
                is_priority: true,
                enabled: true,
            },
            PatternConfig {
                category: EntityCategory::Iban,
                pattern: IBAN_PATTERN.to_string(),
                description: "Deutsche IBAN (DE, 22 Stellen)".to_string(),
                confidence: ConfidenceScore::new(0.98),
                is_priority: true,
                enabled: true,
            },
            PatternConfig {
                category: EntityCategory::PostalCode,
                pattern: POSTAL_CODE_PATTERN.to_string(),
                description: "Postleitzahlen (fünfstellig)".to_string(),
                confidence: ConfidenceScore::new(0.55),
                is_priority: false,
                enabled: true,
            },
            PatternConfig {
                category: EntityCategory::CaseNumber,
                pattern: CASE_NUMBER_PATTERN.to_string(),
                description: "Gerichtliche Aktenzeichen (z. B. 4 C 123/23)".to_string(),
                confidence: ConfidenceScore::new(0.9),
                is_priority: true,
                enabled: true,
            },
            PatternConfig {
                category: EntityCategory::TaxId,
                pattern: TAX_ID_PATTERN.to_string(),
                description: "Steuernummern und Steuer-Identifikationsnummern".to_string(),
                confidence: ConfidenceScore::new(0.92),
                is_priority: true,
                enabled: true,
            },
            PatternConfig {
                category: EntityCategory::Amount,
                pattern: AMOUNT_PATTERN.to_string(),
                description: "Geldbeträge in Euro".to_string(),
                confidence: ConfidenceScore::new(0.8),
                is_priority: false,
                enabled: true,
            },
            PatternConfig {
                category: EntityCategory::StreetAddress,
                pattern: STREET_ADDRESS_PATTERN.to_string(),
                description: "Straßenanschriften, optional mit PLZ und Ort".to_string(),
                confidence: ConfidenceScore::new(0.75),
                is_priority: false,
                enabled: true,
            },
        ];

        Self {
            version: "1.0.0".to_string(),
            enabled: true,
            patterns,
            filter: FilterConfig::default(),
            last_modified: Utc::now(),
            modified_by: "system".to_string(),
        }
    }
}

impl DetectionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> EngineResult<()> {
        if self.version.is_empty() {
            return Err(EngineError::Config("version cannot be empty".to_string()));
        }

        if self.patterns.is_empty() {
            return Err(EngineError::Config("pattern table cannot be empty".to_string()));
        }

        let mut seen: HashSet<EntityCategory> = HashSet::new();
        for pattern_config in &self.patterns {
            if !seen.insert(pattern_config.category) {
                return Err(EngineError::Config(format!(
                    "duplicate pattern for category {}",
                    pattern_config.category
                )));
            }

            if pattern_config.pattern.is_empty() {
                return Err(EngineError::Config(format!(
                    "pattern for {} cannot be empty",
                    pattern_config.category
                )));
            }

            regex::Regex::new(&pattern_config.pattern).map_err(|e| {
                EngineError::PatternCompilation(format!(
                    "invalid pattern for {}: {}",
                    pattern_config.category, e
                ))
            })?;

            if pattern_config.confidence.value() <= 0.0 {
                return Err(EngineError::Config(format!(
                    "confidence for {} must be greater than zero",
                    pattern_config.category
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| EngineError::Config(format!("failed to read config: {}", e)))?;

        let config: Self = serde_json::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        self.validate()?;

        let content = serde_json::to_string_pretty(self)?;

        tokio::fs::write(path, content)
            .await
            .map_err(|e| EngineError::Config(format!("failed to write config: {}", e)))?;

        Ok(())
    }

    /// Patterns that are switched on, in registration order
    pub fn enabled_patterns(&self) -> impl Iterator<Item = &PatternConfig> {
        self.patterns.iter().filter(|p| p.enabled)
    }

    /// Update last modified timestamp
    pub fn touch(&mut self, modified_by: String) {
        self.last_modified = Utc::now();
        self.modified_by = modified_by;
    }

    /// Enable/disable detection for a single category
    pub fn set_category_enabled(&mut self, category: EntityCategory, enabled: bool) {
        let mut changed = false;
        for pattern_config in &mut self.patterns {
            if pattern_config.category == category && pattern_config.enabled != enabled {
                pattern_config.enabled = enabled;
                changed = true;
            }
        }
        if changed {
            self.touch("api".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DetectionConfig::default();
        config.validate().expect("Default config should validate");
        assert_eq!(config.patterns.len(), 9);
        assert!(config.enabled);
    }

    #[test]
    fn test_default_table_is_in_canonical_order() {
        let config = DetectionConfig::default();
        let categories: Vec<EntityCategory> =
            config.patterns.iter().map(|p| p.category).collect();
        assert_eq!(categories, EntityCategory::ALL.to_vec());
    }

    #[test]
    fn test_default_priority_flags() {
        let config = DetectionConfig::default();
        for pattern_config in &config.patterns {
            let expect_priority = matches!(
                pattern_config.category,
                EntityCategory::Email
                    | EntityCategory::Iban
                    | EntityCategory::TaxId
                    | EntityCategory::CaseNumber
                    | EntityCategory::Phone
            );
            assert_eq!(
                pattern_config.is_priority, expect_priority,
                "priority flag mismatch for {}",
                pattern_config.category
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_category() {
        let mut config = DetectionConfig::default();
        let duplicate = config.patterns[0].clone();
        config.patterns.push(duplicate);

        let err = config.validate().expect_err("Duplicate should be rejected");
        assert!(err.to_string().contains("duplicate pattern"));
    }

    #[test]
    fn test_validate_rejects_bad_regex() {
        let mut config = DetectionConfig::default();
        config.patterns[0].pattern = "(unclosed".to_string();

        let err = config.validate().expect_err("Bad regex should be rejected");
        assert!(matches!(err, EngineError::PatternCompilation(_)));
        assert!(err.to_string().contains("PERSON_NAME"));
    }

    #[test]
    fn test_validate_rejects_zero_confidence() {
        let mut config = DetectionConfig::default();
        config.patterns[2].confidence = ConfidenceScore::new(0.0);

        let err = config.validate().expect_err("Zero confidence should be rejected");
        assert!(err.to_string().contains("EMAIL"));
    }

    #[test]
    fn test_set_category_enabled_touches_config() {
        let mut config = DetectionConfig::default();
        let before = config.last_modified;

        config.set_category_enabled(EntityCategory::Amount, false);
        assert_eq!(config.modified_by, "api");
        assert!(config.last_modified >= before);
        assert_eq!(config.enabled_patterns().count(), 8);

        // No-op change does not touch
        config.modified_by = "test".to_string();
        config.set_category_enabled(EntityCategory::Amount, false);
        assert_eq!(config.modified_by, "test");
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let config = DetectionConfig::default();
        let json = serde_json::to_string(&config).expect("Should serialize");
        let parsed: DetectionConfig = serde_json::from_str(&json).expect("Should deserialize");

        parsed.validate().expect("Parsed config should validate");
        let categories: Vec<EntityCategory> =
            parsed.patterns.iter().map(|p| p.category).collect();
        assert_eq!(categories, EntityCategory::ALL.to_vec());
        assert_eq!(parsed.filter.weak_categories, vec![EntityCategory::PersonName]);
    }
}

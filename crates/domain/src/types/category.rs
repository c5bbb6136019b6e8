//! PII entity categories for German legal documents

use serde::{Deserialize, Serialize};

use crate::impl_type_id_conversions;

/// The closed set of PII categories the engine detects
///
/// Variant order is the canonical registration order of the default pattern
/// table; resolution tie-breaks and summary output both rely on it being
/// stable.
///
/// # Examples
/// ```
/// use deckname_domain::types::EntityCategory;
///
/// assert_eq!(EntityCategory::Email.to_string(), "EMAIL");
/// assert_eq!(EntityCategory::Email.replacement_token(1), "[EMAIL_1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityCategory {
    PersonName,
    Phone,
    Email,
    Iban,
    PostalCode,
    CaseNumber,
    TaxId,
    Amount,
    StreetAddress,
}

impl_type_id_conversions!(EntityCategory {
    PersonName => "PERSON_NAME",
    Phone => "PHONE",
    Email => "EMAIL",
    Iban => "IBAN",
    PostalCode => "POSTAL_CODE",
    CaseNumber => "CASE_NUMBER",
    TaxId => "TAX_ID",
    Amount => "AMOUNT",
    StreetAddress => "STREET_ADDRESS",
});

impl EntityCategory {
    /// All categories in canonical registration order
    pub const ALL: [Self; 9] = [
        Self::PersonName,
        Self::Phone,
        Self::Email,
        Self::Iban,
        Self::PostalCode,
        Self::CaseNumber,
        Self::TaxId,
        Self::Amount,
        Self::StreetAddress,
    ];

    /// German display description used in entity summaries
    pub fn description(&self) -> &'static str {
        match self {
            Self::PersonName => "Personennamen",
            Self::Phone => "Telefonnummern",
            Self::Email => "E-Mail-Adressen",
            Self::Iban => "IBAN-Kontonummern",
            Self::PostalCode => "Postleitzahlen",
            Self::CaseNumber => "Aktenzeichen",
            Self::TaxId => "Steuer-Identifikationsnummern",
            Self::Amount => "Geldbeträge",
            Self::StreetAddress => "Anschriften",
        }
    }

    /// Builds the replacement token for the given sequence number
    ///
    /// The token grammar is fixed: `[` + type id + `_` + decimal sequence +
    /// `]`, e.g. `[EMAIL_3]`. Everything that emits or parses tokens goes
    /// through this pair of functions.
    pub fn replacement_token(&self, sequence: u64) -> String {
        format!("[{}_{}]", self, sequence)
    }

    /// Parses a replacement token back into category and sequence number
    ///
    /// Returns `None` for anything that is not a well-formed token of a known
    /// category.
    pub fn parse_replacement_token(token: &str) -> Option<(Self, u64)> {
        let inner = token.strip_prefix('[')?.strip_suffix(']')?;
        let (type_id, sequence) = inner.rsplit_once('_')?;
        if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let category = type_id.parse::<Self>().ok()?;
        let sequence = sequence.parse::<u64>().ok()?;
        Some((category, sequence))
    }
}

//! Shared test helpers for `deckname-engine` integration tests.
//!
//! Provides a realistic multi-page German legal letter fixture and assertion
//! helpers for the guarantees every anonymization run must uphold, so the
//! scenario tests can focus on behaviour instead of bookkeeping.

use deckname_domain::types::{DocumentPage, DocumentResult, EntityCategory};

/// Three pages of a fictitious court letter with PII of most categories:
/// names, a case number, a tax number, an amount, email addresses, a phone
/// number, an IBAN, and a street address with postal code.
pub fn sample_legal_letter() -> Vec<DocumentPage> {
    vec![
        DocumentPage::new(
            1,
            "Amtsgericht München\nAz. 4 C 123/23\n\nSehr geehrter Herr Max Mustermann,\n\nIhre Steuernummer 12/345/67890 ist vermerkt. Der Streitwert beträgt 1.234,56 €.",
        ),
        DocumentPage::new(
            2,
            "Die Klägerin erreichen Sie unter max.mustermann@firma.de oder 0171 2345678.\nBankverbindung: DE89 3704 0044 0532 0130 00.",
        ),
        DocumentPage::new(
            3,
            "Zustellung an: Erika Musterfrau, Musterstraße 12, 10115 Berlin.\nWeitere E-Mail: erika@kanzlei-beispiel.de.",
        ),
    ]
}

/// Asserts structural soundness of every entity in the result:
/// spans slice the original page text to the recorded value, entities are
/// sorted and non-overlapping within each page, tokens have the unpadded
/// `[CATEGORY_N]` form, and page numbers match their page.
pub fn assert_entities_well_formed(result: &DocumentResult) {
    for page in &result.pages {
        let mut previous_end = 0usize;
        for entity in &page.entities {
            assert_eq!(entity.page_number, page.page_number, "entity carries its page number");
            assert!(
                entity.start_position >= previous_end,
                "entities must be sorted and non-overlapping on page {}",
                page.page_number
            );
            previous_end = entity.end_position;

            let span = &page.original_text[entity.start_position..entity.end_position];
            assert_eq!(span, entity.value, "span must slice to the recorded value");

            let (category, sequence) =
                EntityCategory::parse_replacement_token(&entity.replacement_token)
                    .expect("token must have the [CATEGORY_N] form");
            assert_eq!(category, entity.category);
            assert_eq!(sequence, entity.global_sequence_number);
            assert_eq!(
                entity.replacement_token,
                entity.category.replacement_token(entity.global_sequence_number),
                "token numbering must be unpadded"
            );
        }
    }
}

/// Asserts that, per category, global sequence numbers are exactly
/// 1, 2, 3, ... in document reading order and never reset across pages.
pub fn assert_sequences_strictly_increase(result: &DocumentResult) {
    let mut expected: std::collections::HashMap<EntityCategory, u64> =
        std::collections::HashMap::new();

    for page in &result.pages {
        for entity in &page.entities {
            let counter = expected.entry(entity.category).or_insert(0);
            *counter += 1;
            assert_eq!(
                entity.global_sequence_number, *counter,
                "sequence numbers for {} must increase without gaps or resets",
                entity.category
            );
        }
    }
}

/// Asserts the length identity on every page: the anonymized text differs
/// from the original by exactly the sum of per-entity token/span deltas.
pub fn assert_length_accounting(result: &DocumentResult) {
    for page in &result.pages {
        let expected_delta: i64 = page
            .entities
            .iter()
            .map(|e| e.replacement_token.len() as i64 - e.length() as i64)
            .sum();
        let actual_delta = page.anonymized_text.len() as i64 - page.original_text.len() as i64;
        assert_eq!(
            actual_delta, expected_delta,
            "length delta mismatch on page {}",
            page.page_number
        );
    }
}

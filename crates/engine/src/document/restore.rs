//! Token rehydration
//!
//! Restoring is the inverse of anonymization for callers inside the trust
//! boundary, for example to show the original document next to a reviewed
//! anonymized one. It is deliberately lenient: a token with no map entry is
//! logged and left in place rather than failing the whole restore, because
//! a partially restored text is more useful for review than none.

use once_cell::sync::Lazy;
use regex::Regex;

use deckname_domain::types::RehydrationMap;
use tracing::warn;

static TOKEN_SCANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[A-Z][A-Z_]*_\d+\]").expect("token scanner regex should compile - this is a bug")
});

/// Replace every known replacement token with its original value.
///
/// Unknown tokens and token-shaped text survive verbatim. Text without any
/// tokens comes back unchanged.
pub fn restore(anonymized_text: &str, map: &RehydrationMap) -> String {
    TOKEN_SCANNER
        .replace_all(anonymized_text, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            match map.original_value(token) {
                Some(original) => original.to_string(),
                None => {
                    warn!(token, "token missing from rehydration map, left in place");
                    token.to_string()
                }
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckname_domain::types::{EntityCategory, RehydrationEntry};

    fn map_with(entries: &[(&str, &str, EntityCategory)]) -> RehydrationMap {
        let mut map = RehydrationMap::new();
        for (token, value, category) in entries {
            map.insert(RehydrationEntry {
                replacement_token: token.to_string(),
                original_value: value.to_string(),
                category: *category,
                page_number: 1,
            });
        }
        map
    }

    #[test]
    fn test_restores_known_tokens() {
        let map = map_with(&[
            ("[EMAIL_1]", "max@firma.de", EntityCategory::Email),
            ("[PHONE_1]", "0171 2345678", EntityCategory::Phone),
        ]);

        let restored = restore("Kontakt: [EMAIL_1], Tel: [PHONE_1]", &map);
        assert_eq!(restored, "Kontakt: max@firma.de, Tel: 0171 2345678");
    }

    #[test]
    fn test_unknown_token_survives_verbatim() {
        let map = map_with(&[("[EMAIL_1]", "a@b.de", EntityCategory::Email)]);

        let restored = restore("[EMAIL_1] und [EMAIL_99]", &map);
        assert_eq!(restored, "a@b.de und [EMAIL_99]");
    }

    #[test]
    fn test_token_shaped_text_is_left_alone() {
        let map = map_with(&[("[EMAIL_1]", "a@b.de", EntityCategory::Email)]);

        // Not tokens: spaces, lowercase, missing number
        assert_eq!(restore("[NOT A TOKEN]", &map), "[NOT A TOKEN]");
        assert_eq!(restore("[email_1]", &map), "[email_1]");
        assert_eq!(restore("[EMAIL_]", &map), "[EMAIL_]");
    }

    #[test]
    fn test_multi_word_category_tokens_restore() {
        let map =
            map_with(&[("[PERSON_NAME_2]", "Erika Musterfrau", EntityCategory::PersonName)]);

        assert_eq!(restore("Zeugin: [PERSON_NAME_2]", &map), "Zeugin: Erika Musterfrau");
    }

    #[test]
    fn test_empty_text_and_empty_map() {
        assert_eq!(restore("", &RehydrationMap::new()), "");
        assert_eq!(restore("kein Token hier", &RehydrationMap::new()), "kein Token hier");
    }
}

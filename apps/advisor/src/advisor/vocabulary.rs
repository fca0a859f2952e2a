//! Fixed word lists the advisor matches against.
//!
//! Matching code only ever reads these slices, so widening a vocabulary is a
//! one-line change here.

/// Keywords recognised by the extractor. Matched as whole words, lower-case.
pub const KEYWORD_VOCABULARY: &[&str] = &[
    "secure",
    "auth",
    "json",
    "xml",
    "real-time",
    "scalable",
    "report",
    "user",
    "data",
];

/// Domain nouns promoted to schema properties. Order here is property order.
pub const ENTITY_VOCABULARY: &[&str] = &["user", "order", "product", "report"];

/// Keyword that forces the gRPC recommendation.
pub const REAL_TIME: &str = "real-time";

/// Keyword that selects GraphQL when real-time is absent.
pub const REPORT: &str = "report";

/// Second GraphQL trigger. Not part of `KEYWORD_VOCABULARY`, so extraction never
/// yields it; only a hand-built `KeywordSet` can carry it.
pub const FLEXIBLE_HINT: &str = "flexible";

/// Property emitted when no entity word appears in the document.
pub const FALLBACK_PROPERTY: &str = "sample_field";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_vocabulary_has_nine_lowercase_words() {
        assert_eq!(KEYWORD_VOCABULARY.len(), 9);
        for word in KEYWORD_VOCABULARY {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn test_precedence_keywords_are_in_vocabulary() {
        assert!(KEYWORD_VOCABULARY.contains(&REAL_TIME));
        assert!(KEYWORD_VOCABULARY.contains(&REPORT));
    }

    #[test]
    fn test_flexible_hint_is_not_extractable() {
        assert!(!KEYWORD_VOCABULARY.contains(&FLEXIBLE_HINT));
    }

    #[test]
    fn test_entity_order_is_fixed() {
        assert_eq!(ENTITY_VOCABULARY, &["user", "order", "product", "report"]);
    }
}

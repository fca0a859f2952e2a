//! Keyword Extractor — whole-word, case-insensitive scan against `KEYWORD_VOCABULARY`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::advisor::vocabulary::KEYWORD_VOCABULARY;

/// One alternation over the whole vocabulary, anchored on word boundaries.
static KEYWORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = KEYWORD_VOCABULARY
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("keyword vocabulary is a valid regex")
});

/// Deduplicated set of matched keywords.
///
/// Membership is what matters; it serializes as a sorted array so exported
/// drafts are byte-stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeywordSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Extracts every vocabulary keyword that appears as a whole word in `text`.
/// Empty text yields an empty set.
pub fn extract_keywords(text: &str) -> KeywordSet {
    if text.is_empty() {
        return KeywordSet::default();
    }
    let lowered = text.to_lowercase();
    KEYWORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .collect()
}

//! Keyword extraction
//!
//! Keeps tokens that are not stopwords and are at least `min_length` long,
//! drops repeats (first occurrence wins), then keeps the first
//! `max_keywords`. Filtering and deduplication happen before truncation, so
//! a repeated word never uses up a slot.

use rustc_hash::FxHashSet;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::TokenStream;

/// Configuration for keyword extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Minimum token length in characters
    pub min_length: usize,
    /// Maximum number of keywords returned
    pub max_keywords: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_keywords: 20,
        }
    }
}

/// Stopword-filtered keyword extractor
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    stopwords: StopwordFilter,
    config: KeywordConfig,
}

impl KeywordExtractor {
    /// Create an extractor with default config and the journal stopwords
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_config(mut self, config: KeywordConfig) -> Self {
        self.config = config;
        self
    }

    /// Set minimum keyword length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    /// Set maximum number of keywords
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.config.max_keywords = max_keywords;
        self
    }

    pub fn config(&self) -> KeywordConfig {
        self.config
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    fn is_candidate(&self, token: &str) -> bool {
        // Tokens are ASCII, so byte length equals character count.
        token.len() >= self.config.min_length && !self.stopwords.is_stopword(token)
    }

    /// Extract keywords in first-seen order
    pub fn extract(&self, tokens: &TokenStream) -> Vec<String> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        tokens
            .iter()
            .filter(|t| self.is_candidate(t))
            .filter(|t| seen.insert(*t))
            .take(self.config.max_keywords)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::tokenize;

    fn extract(text: &str) -> Vec<String> {
        KeywordExtractor::new().extract(&tokenize(text))
    }

    #[test]
    fn test_filters_stopwords_and_short_tokens() {
        let kws = extract("I went to the park with my friends and felt calm");
        assert_eq!(kws, vec!["went", "park", "friends", "felt", "calm"]);
    }

    #[test]
    fn test_length_boundary() {
        // length <= 3 is dropped, 4 is kept
        assert_eq!(extract("cat dogs"), vec!["dogs"]);
    }

    #[test]
    fn test_stopwords_longer_than_three_are_dropped() {
        assert!(extract("themselves yourselves having doing").is_empty());
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let kws = extract("Rain, sunshine, rain again, SUNSHINE");
        assert_eq!(kws, vec!["rain", "sunshine", "again"]);
    }

    #[test]
    fn test_truncates_after_dedup() {
        let mut text = String::from("repeat repeat repeat ");
        for i in 0..30 {
            text.push_str(&format!("word{i} "));
        }
        let kws = extract(&text);
        assert_eq!(kws.len(), 20);
        assert_eq!(kws[0], "repeat");
        assert_eq!(kws[1], "word0");
        assert_eq!(kws[19], "word18");
    }

    #[test]
    fn test_empty_text() {
        assert!(extract("").is_empty());
        assert!(extract("  \n ").is_empty());
    }

    #[test]
    fn test_custom_limits() {
        let extractor = KeywordExtractor::new()
            .with_min_length(2)
            .with_max_keywords(2)
            .with_stopwords(StopwordFilter::empty());
        let kws = extractor.extract(&tokenize("go to the gym today"));
        assert_eq!(kws, vec!["go", "to"]);
    }

    #[test]
    fn test_numbers_and_underscores_are_keywords() {
        assert_eq!(extract("2024 was long_term"), vec!["2024", "long_term"]);
    }
}

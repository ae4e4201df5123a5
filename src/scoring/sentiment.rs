//! Lexicon-based sentiment scoring
//!
//! Score formula: `(pos - neg) / max(1, pos + neg)`, clamped to `[-1, 1]`,
//! where `pos`/`neg` are whole-word hit counts against the two lexicons.

use serde::Serialize;

use crate::lexicon::default_words::{NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::lexicon::Lexicon;
use crate::nlp::tokenizer::TokenStream;
use crate::types::{SentimentLabel, SentimentThresholds};

/// Outcome of sentiment scoring, including the raw hit counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub positive_hits: u32,
    pub negative_hits: u32,
    pub score: f64,
    pub label: SentimentLabel,
}

/// Sentiment scorer over a positive and a negative lexicon
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    positive: Lexicon,
    negative: Lexicon,
    thresholds: SentimentThresholds,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(
            Lexicon::from_words(POSITIVE_WORDS),
            Lexicon::from_words(NEGATIVE_WORDS),
        )
    }
}

impl SentimentScorer {
    pub fn new(positive: Lexicon, negative: Lexicon) -> Self {
        Self {
            positive,
            negative,
            thresholds: SentimentThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: SentimentThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn positive(&self) -> &Lexicon {
        &self.positive
    }

    pub fn negative(&self) -> &Lexicon {
        &self.negative
    }

    pub fn thresholds(&self) -> SentimentThresholds {
        self.thresholds
    }

    /// Score a token stream
    pub fn score(&self, tokens: &TokenStream) -> SentimentScore {
        let positive_hits = self.positive.count_matches(tokens);
        let negative_hits = self.negative.count_matches(tokens);
        let score = polarity(positive_hits, negative_hits);

        SentimentScore {
            positive_hits,
            negative_hits,
            score,
            label: self.thresholds.label(score),
        }
    }
}

/// `(pos - neg) / max(1, pos + neg)`, clamped to `[-1, 1]`
pub fn polarity(positive_hits: u32, negative_hits: u32) -> f64 {
    let pos = f64::from(positive_hits);
    let neg = f64::from(negative_hits);
    let total = (pos + neg).max(1.0);
    ((pos - neg) / total).clamp(-1.0, 1.0)
}

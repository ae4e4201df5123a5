//! Programmatic analyzer configuration

use crate::config::spec::{AnalyzerSpec, ListMode, StopwordListType, WordListSpec};
use crate::lexicon::default_words::{NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::lexicon::{EmotionLexicon, Lexicon};
use crate::nlp::stopwords::StopwordFilter;
use crate::scoring::keywords::{KeywordConfig, KeywordExtractor};
use crate::scoring::sentiment::SentimentScorer;
use crate::types::{Emotion, SentimentThresholds};

use super::Analyzer;

/// Builder for [`Analyzer`], starting from the default lexicons.
///
/// Words are lower-cased on insertion. Entries that are not a single run of
/// ASCII word characters are accepted but can never match; use
/// [`Analyzer::from_spec`] to have them rejected.
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    positive: Lexicon,
    negative: Lexicon,
    emotions: EmotionLexicon,
    stopwords: StopwordFilter,
    thresholds: SentimentThresholds,
    keyword_config: KeywordConfig,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            positive: Lexicon::from_words(POSITIVE_WORDS),
            negative: Lexicon::from_words(NEGATIVE_WORDS),
            emotions: EmotionLexicon::default(),
            stopwords: StopwordFilter::default(),
            thresholds: SentimentThresholds::default(),
            keyword_config: KeywordConfig::default(),
        }
    }
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the positive lexicon
    pub fn positive_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.positive = Lexicon::from_words(words);
        self
    }

    /// Add words to the positive lexicon
    pub fn extend_positive<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.positive.add_words(words);
        self
    }

    /// Replace the negative lexicon
    pub fn negative_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.negative = Lexicon::from_words(words);
        self
    }

    /// Add words to the negative lexicon
    pub fn extend_negative<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.negative.add_words(words);
        self
    }

    /// Replace one emotion category's words
    pub fn emotion_words<S: AsRef<str>>(mut self, emotion: Emotion, words: &[S]) -> Self {
        self.emotions.set_category(emotion, Lexicon::from_words(words));
        self
    }

    /// Add words to one emotion category
    pub fn extend_emotion<S: AsRef<str>>(mut self, emotion: Emotion, words: &[S]) -> Self {
        self.emotions.category_mut(emotion).add_words(words);
        self
    }

    pub fn stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn extra_stopwords<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.stopwords.add_stopwords(words);
        self
    }

    pub fn thresholds(mut self, thresholds: SentimentThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn min_keyword_length(mut self, min_length: usize) -> Self {
        self.keyword_config.min_length = min_length;
        self
    }

    pub fn max_keywords(mut self, max_keywords: usize) -> Self {
        self.keyword_config.max_keywords = max_keywords;
        self
    }

    /// Apply every override in `spec`. Does not validate.
    pub(crate) fn apply_spec(mut self, spec: &AnalyzerSpec) -> Self {
        if let Some(list) = &spec.lexicons.positive {
            apply_list(&mut self.positive, list);
        }
        if let Some(list) = &spec.lexicons.negative {
            apply_list(&mut self.negative, list);
        }
        for (name, list) in &spec.lexicons.emotions {
            if let Ok(emotion) = name.parse::<Emotion>() {
                apply_list(self.emotions.category_mut(emotion), list);
            }
        }

        let defaults = SentimentThresholds::default();
        self.thresholds = SentimentThresholds::new(
            spec.thresholds.positive.unwrap_or(defaults.positive),
            spec.thresholds.negative.unwrap_or(defaults.negative),
        );

        let keywords = &spec.keywords;
        if let Some(base) = keywords.stopwords {
            self.stopwords = match base {
                StopwordListType::Journal => StopwordFilter::journal(),
                StopwordListType::English => StopwordFilter::english(),
                StopwordListType::None => StopwordFilter::empty(),
            };
        }
        self.stopwords.add_stopwords(&keywords.extra_stopwords);
        if let Some(max) = keywords.max_keywords {
            self.keyword_config.max_keywords = max;
        }
        if let Some(min) = keywords.min_length {
            self.keyword_config.min_length = min;
        }

        self
    }

    pub fn build(self) -> Analyzer {
        let sentiment =
            SentimentScorer::new(self.positive, self.negative).with_thresholds(self.thresholds);
        let keywords = KeywordExtractor::new()
            .with_stopwords(self.stopwords)
            .with_config(self.keyword_config);
        Analyzer::from_parts(sentiment, self.emotions, keywords)
    }
}

fn apply_list(lexicon: &mut Lexicon, list: &WordListSpec) {
    if list.mode == ListMode::Replace {
        *lexicon = Lexicon::new();
    }
    lexicon.add_words(&list.words);
}

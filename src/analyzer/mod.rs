//! The journal entry analyzer
//!
//! [`Analyzer`] runs the three scoring stages over one shared token stream:
//!
//! 1. Sentiment: positive/negative lexicon hits → score and label
//! 2. Emotions: per-category lexicon hits
//! 3. Keywords: stopword-filtered, deduplicated, capped token list
//!
//! Analysis is pure and total: any string, including the empty one, yields a
//! result. An `Analyzer` is immutable after construction and can be shared
//! across threads.

mod builder;

pub use builder::AnalyzerBuilder;

use rayon::prelude::*;

use crate::config::errors::AnalyzerError;
use crate::config::spec::AnalyzerSpec;
use crate::config::validation::ValidationEngine;
use crate::lexicon::EmotionLexicon;
use crate::nlp::tokenizer::TokenStream;
use crate::scoring::keywords::KeywordExtractor;
use crate::scoring::sentiment::{SentimentScore, SentimentScorer};
use crate::types::AnalysisResult;

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_SENTIMENT: &str = "sentiment";
pub const STAGE_EMOTIONS: &str = "emotions";
pub const STAGE_KEYWORDS: &str = "keywords";

/// Enter a tracing span for an analysis stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("analysis_stage", stage = $name).entered();
    };
}

/// Lexicon-based sentiment, emotion and keyword analyzer
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    sentiment: SentimentScorer,
    emotions: EmotionLexicon,
    keywords: KeywordExtractor,
}

impl Analyzer {
    /// Create an analyzer with the default lexicons and stopwords
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a customized analyzer from the defaults
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    pub(crate) fn from_parts(
        sentiment: SentimentScorer,
        emotions: EmotionLexicon,
        keywords: KeywordExtractor,
    ) -> Self {
        Self {
            sentiment,
            emotions,
            keywords,
        }
    }

    /// Build an analyzer from a spec.
    ///
    /// The spec is validated first; any error-severity diagnostic fails the
    /// build with the full report. Warnings are logged (with the `tracing`
    /// feature) and otherwise ignored.
    pub fn from_spec(spec: &AnalyzerSpec) -> Result<Self, AnalyzerError> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            return Err(AnalyzerError::Invalid(report));
        }

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(code = %warning.code, path = %warning.path, "{}", warning.message);
        }

        Ok(AnalyzerBuilder::default().apply_spec(spec).build())
    }

    /// Parse a JSON spec and build an analyzer from it
    pub fn from_json(json: &str) -> Result<Self, AnalyzerError> {
        let spec: AnalyzerSpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }

    pub fn sentiment_scorer(&self) -> &SentimentScorer {
        &self.sentiment
    }

    pub fn emotion_lexicon(&self) -> &EmotionLexicon {
        &self.emotions
    }

    pub fn keyword_extractor(&self) -> &KeywordExtractor {
        &self.keywords
    }

    /// Analyze one block of text
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = {
            trace_stage!(STAGE_TOKENIZE);
            TokenStream::new(text)
        };
        self.analyze_tokens(&tokens)
    }

    /// Sentiment only, with the raw hit counts
    pub fn score_sentiment(&self, text: &str) -> SentimentScore {
        self.sentiment.score(&TokenStream::new(text))
    }

    /// Analyze an already tokenized stream
    pub fn analyze_tokens(&self, tokens: &TokenStream) -> AnalysisResult {
        let sentiment = {
            trace_stage!(STAGE_SENTIMENT);
            self.sentiment.score(tokens)
        };
        let emotions = {
            trace_stage!(STAGE_EMOTIONS);
            self.emotions.count(tokens)
        };
        let keywords = {
            trace_stage!(STAGE_KEYWORDS);
            self.keywords.extract(tokens)
        };

        AnalysisResult {
            sentiment_score: sentiment.score,
            sentiment_label: sentiment.label,
            emotions,
            keywords,
        }
    }

    /// Analyze many texts in parallel. Output order matches input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<AnalysisResult>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(entries = texts.len(), "analyzing batch");

        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error_code::ErrorCode;
    use crate::types::{Emotion, SentimentLabel};

    #[test]
    fn test_empty_text() {
        let result = Analyzer::new().analyze("");
        assert_eq!(result.sentiment_score, 0.0);
        assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
        assert_eq!(result.emotions.total(), 0);
        assert!(result.keywords.is_empty());
        assert_eq!(result, AnalysisResult::neutral());
    }

    #[test]
    fn test_full_entry() {
        let result = Analyzer::new().analyze(
            "Today was wonderful! I felt happy and excited about the trip, \
             though a little nervous about flying.",
        );
        assert_eq!(result.sentiment_score, 1.0); // wonderful, happy
        assert_eq!(result.sentiment_label, SentimentLabel::Positive);
        assert_eq!(result.emotions.get(Emotion::Joy), 3); // wonderful, happy, excited
        assert_eq!(result.emotions.get(Emotion::Fear), 1); // nervous
        assert_eq!(
            result.keywords,
            vec![
                "today", "wonderful", "felt", "happy", "excited", "trip", "though", "little",
                "nervous", "flying"
            ]
        );
    }

    #[test]
    fn test_score_sentiment_reports_hits() {
        let s = Analyzer::new().score_sentiment("good good bad");
        assert_eq!(s.positive_hits, 2);
        assert_eq!(s.negative_hits, 1);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let analyzer = Analyzer::new();
        let texts = vec!["happy day", "", "sad and worried", "nothing special here"];
        let batch = analyzer.analyze_batch(&texts);
        let sequential: Vec<_> = texts.iter().map(|t| analyzer.analyze(t)).collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_from_json_extends_lexicons() {
        let analyzer = Analyzer::from_json(
            r#"{
                "v": 1,
                "lexicons": {
                    "positive": { "words": ["grateful"] },
                    "emotions": { "joy": { "mode": "replace", "words": ["grateful"] } }
                }
            }"#,
        )
        .unwrap();

        let result = analyzer.analyze("Grateful and happy");
        assert_eq!(result.sentiment_score, 1.0);
        // joy was replaced, so "happy" no longer counts there
        assert_eq!(result.emotions.get(Emotion::Joy), 1);
    }

    #[test]
    fn test_from_json_documented_example() {
        let analyzer = Analyzer::from_json(
            r#"{
              "v": 1,
              "lexicons": {
                "positive": { "mode": "extend", "words": ["grateful"] },
                "negative": null,
                "emotions": { "joy": { "mode": "replace", "words": ["glad"] } }
              },
              "thresholds": { "positive": 0.2, "negative": -0.2 },
              "keywords": { "max_keywords": 20, "min_length": 4, "stopwords": "journal" },
              "strict": false
            }"#,
        )
        .unwrap();

        // null negative keeps the default list
        assert!(analyzer.sentiment_scorer().negative().contains("sad"));
        assert!(analyzer.sentiment_scorer().positive().contains("happy"));

        let result = analyzer.analyze("Grateful and glad, but happy too");
        assert_eq!(result.sentiment_score, 1.0); // grateful, happy
        assert_eq!(result.sentiment_label, SentimentLabel::Positive);
        assert_eq!(result.emotions.get(Emotion::Joy), 1); // glad only
        assert_eq!(result.keywords, vec!["grateful", "glad", "happy"]);
    }

    #[test]
    fn test_from_json_english_stopwords() {
        let analyzer =
            Analyzer::from_json(r#"{ "v": 1, "keywords": { "stopwords": "english" } }"#).unwrap();
        let stopwords = analyzer.keyword_extractor().stopwords();
        assert!(stopwords.is_stopword("very"));
        assert!(stopwords.is_stopword("again"));

        let text = "Again the lake was very calm";
        assert_eq!(analyzer.analyze(text).keywords, vec!["lake", "calm"]);
        assert_eq!(
            Analyzer::new().analyze(text).keywords,
            vec!["again", "lake", "very", "calm"]
        );
    }

    #[test]
    fn test_from_json_invalid_reports_all_errors() {
        let err = Analyzer::from_json(
            r#"{ "v": 1, "keywords": { "max_keywords": 0 }, "thresholds": { "positive": 2 } }"#,
        )
        .unwrap_err();
        let report = err.report().unwrap();
        assert_eq!(report.errors().count(), 2);
        assert!(report
            .errors()
            .any(|e| e.code == ErrorCode::LimitOutOfRange));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Analyzer::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AnalyzerError::Json(_)));
    }

    #[test]
    fn test_warnings_do_not_fail_build() {
        let analyzer = Analyzer::from_json(
            r#"{
                "v": 1,
                "colour": "blue",
                "lexicons": { "negative": { "mode": "replace", "words": [] } }
            }"#,
        )
        .unwrap();
        let result = analyzer.analyze("sad bad awful");
        assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
    }
}

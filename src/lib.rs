//! # journal-lexicon
//!
//! Lexicon-based analysis of journal entries: a sentiment score and label,
//! per-emotion keyword counts, and a list of extracted keywords.
//!
//! ## Quick start
//!
//! ```rust
//! use journal_lexicon::{analyze, Emotion, SentimentLabel};
//!
//! let result = analyze("Had a great walk, felt happy and a little nervous.");
//! assert_eq!(result.sentiment_label, SentimentLabel::Positive);
//! assert_eq!(result.emotions.get(Emotion::Fear), 1);
//! assert!(result.keywords.contains(&"walk".to_string()));
//! ```
//!
//! ## Customization
//!
//! ```rust
//! use journal_lexicon::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .extend_positive(&["grateful"])
//!     .max_keywords(5)
//!     .build();
//! assert_eq!(analyzer.analyze("grateful").sentiment_score, 1.0);
//! ```
//!
//! Or from JSON, validated with every problem reported at once:
//!
//! ```rust
//! use journal_lexicon::Analyzer;
//!
//! let err = Analyzer::from_json(r#"{ "v": 1, "keywords": { "max_keywords": 0 } }"#);
//! assert!(err.is_err());
//! ```

pub mod analyzer;
pub mod config;
pub mod format;
pub mod lexicon;
pub mod nlp;
pub mod scoring;
pub mod summary;
pub mod types;

use once_cell::sync::Lazy;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::errors::{AnalyzerError, SpecError};
pub use config::spec::AnalyzerSpec;
pub use format::LegacyPayload;
pub use summary::AnalysisSummary;
pub use types::{AnalysisResult, Emotion, EmotionCounts, SentimentLabel, SentimentThresholds};

static DEFAULT_ANALYZER: Lazy<Analyzer> = Lazy::new(Analyzer::default);

/// The shared analyzer with the built-in lexicons
pub fn default_analyzer() -> &'static Analyzer {
    &DEFAULT_ANALYZER
}

/// Analyze text with the built-in lexicons
pub fn analyze(text: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(text)
}

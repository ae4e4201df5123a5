//! Analyzer specification types.
//!
//! An [`AnalyzerSpec`] describes lexicon overrides, label thresholds and
//! keyword limits. It is the input to the
//! [`super::validation::ValidationEngine`] and to
//! [`Analyzer::from_spec`](crate::Analyzer::from_spec).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "lexicons": {
//!     "positive": { "mode": "extend", "words": ["grateful", "calm"] },
//!     "emotions": { "joy": { "mode": "replace", "words": ["glad"] } }
//!   },
//!   "thresholds": { "positive": 0.2, "negative": -0.2 },
//!   "keywords": { "max_keywords": 20, "min_length": 4, "stopwords": "journal" },
//!   "strict": false
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// The only spec version understood by this crate
pub const SPEC_VERSION: u32 = 1;

/// Top-level analyzer specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    #[serde(default)]
    pub lexicons: LexiconSpec,

    #[serde(default)]
    pub thresholds: ThresholdSpec,

    #[serde(default)]
    pub keywords: KeywordSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for AnalyzerSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            lexicons: LexiconSpec::default(),
            thresholds: ThresholdSpec::default(),
            keywords: KeywordSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Lexicon overrides. Omitted lexicons keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconSpec {
    #[serde(default)]
    pub positive: Option<WordListSpec>,

    #[serde(default)]
    pub negative: Option<WordListSpec>,

    /// Keyed by emotion name (`joy`, `sadness`, ...). Unknown names are
    /// reported by validation rather than rejected during parsing.
    #[serde(default)]
    pub emotions: BTreeMap<String, WordListSpec>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// How a word list combines with the default list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    /// Add the words to the default list.
    #[default]
    Extend,
    /// Use only the given words.
    Replace,
}

/// A word list override
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordListSpec {
    #[serde(default)]
    pub mode: ListMode,

    #[serde(default)]
    pub words: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Sentiment label thresholds. Omitted values keep the defaults (±0.2).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdSpec {
    #[serde(default)]
    pub positive: Option<f64>,

    #[serde(default)]
    pub negative: Option<f64>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Base stopword list for keyword extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordListType {
    /// The fixed journal list (articles, pronouns, auxiliaries).
    #[default]
    Journal,
    /// The broader English list from the `stop-words` crate.
    English,
    /// No stopwords.
    None,
}

/// Keyword extraction settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordSpec {
    #[serde(default)]
    pub max_keywords: Option<usize>,

    /// Minimum token length kept as a keyword.
    #[serde(default)]
    pub min_length: Option<usize>,

    #[serde(default)]
    pub stopwords: Option<StopwordListType>,

    /// Added to the base stopword list.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

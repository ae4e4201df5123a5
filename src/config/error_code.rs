//! Stable error codes for analyzer spec diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable category of a spec diagnostic.
///
/// Serialized in snake_case; the names are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `v` is not a supported spec version.
    UnsupportedVersion,
    /// A lexicon or stopword entry can never match a token.
    InvalidWord,
    /// An emotion key is not one of the six categories.
    UnknownEmotion,
    /// A label threshold is out of range or mis-ordered.
    InvalidThreshold,
    /// A keyword limit is zero.
    LimitOutOfRange,
    /// A lexicon was replaced with an empty word list.
    EmptyLexicon,
    /// A field is not part of the schema.
    UnknownField,
    /// Generic failure raised by custom rules.
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidWord => "invalid_word",
            Self::UnknownEmotion => "unknown_emotion",
            Self::InvalidThreshold => "invalid_threshold",
            Self::LimitOutOfRange => "limit_out_of_range",
            Self::EmptyLexicon => "empty_lexicon",
            Self::UnknownField => "unknown_field",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Error types for building an analyzer from a spec.

use serde::Serialize;

use super::error_code::ErrorCode;
use super::validation::ValidationReport;

/// One problem found in an [`AnalyzerSpec`](super::spec::AnalyzerSpec).
///
/// `path` is a JSON pointer into the spec (e.g. `/lexicons/positive/words/2`).
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("[{code}] {path}: {message}")]
pub struct SpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Failure to build an [`Analyzer`](crate::Analyzer) from configuration
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("invalid analyzer spec JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("analyzer spec has {} error(s); first: {}", .0.errors().count(), first_error(.0))]
    Invalid(ValidationReport),
}

fn first_error(report: &ValidationReport) -> String {
    report
        .errors()
        .next()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl AnalyzerError {
    /// The validation report, if this is a validation failure
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Invalid(report) => Some(report),
            Self::Json(_) => None,
        }
    }
}

//! Validation engine for analyzer specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`AnalyzerSpec`](super::spec::AnalyzerSpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust
//! use journal_lexicon::config::spec::AnalyzerSpec;
//! use journal_lexicon::config::validation::ValidationEngine;
//!
//! let spec: AnalyzerSpec = serde_json::from_str(r#"{ "v": 1 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! assert!(report.is_valid());
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;
use crate::nlp::tokenizer::is_single_word;
use crate::types::Emotion;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to a [`SpecError`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`AnalyzerSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and `Send + Sync` so a long-lived engine can be
/// shared across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"thresholds"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &AnalyzerSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`AnalyzerSpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(LexiconWordsRule));
        engine.add_rule(Box::new(EmptyLexiconRule));
        engine.add_rule(Box::new(ThresholdsRule));
        engine.add_rule(Box::new(KeywordLimitsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &AnalyzerSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Every word list in the spec with its JSON pointer
fn word_lists(spec: &AnalyzerSpec) -> Vec<(String, &WordListSpec)> {
    let mut lists = Vec::new();
    if let Some(list) = &spec.lexicons.positive {
        lists.push(("/lexicons/positive".to_string(), list));
    }
    if let Some(list) = &spec.lexicons.negative {
        lists.push(("/lexicons/negative".to_string(), list));
    }
    for (name, list) in &spec.lexicons.emotions {
        lists.push((format!("/lexicons/emotions/{name}"), list));
    }
    lists
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Supported version ───────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &AnalyzerSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Lexicon words must be matchable; emotion keys must exist ────────────

struct LexiconWordsRule;

impl LexiconWordsRule {
    fn check_words(path: &str, words: &[String]) -> Vec<ValidationDiagnostic> {
        words
            .iter()
            .enumerate()
            .filter(|(_, w)| !is_single_word(&w.to_lowercase()))
            .map(|(i, w)| {
                ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidWord,
                        format!("{path}/{i}"),
                        format!("\"{w}\" is not a single word and can never match"),
                    )
                    .with_hint("Use one word made of ASCII letters, digits or '_'"),
                )
            })
            .collect()
    }
}

impl ValidationRule for LexiconWordsRule {
    fn name(&self) -> &str {
        "lexicon_words"
    }

    fn validate(&self, spec: &AnalyzerSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        for name in spec.lexicons.emotions.keys() {
            if name.parse::<Emotion>().is_err() {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::UnknownEmotion,
                        format!("/lexicons/emotions/{name}"),
                        format!("unknown emotion \"{name}\""),
                    )
                    .with_hint("Use joy, sadness, anger, fear, surprise, or disgust"),
                ));
            }
        }

        for (path, list) in word_lists(spec) {
            out.extend(Self::check_words(&format!("{path}/words"), &list.words));
        }
        out.extend(Self::check_words(
            "/keywords/extra_stopwords",
            &spec.keywords.extra_stopwords,
        ));

        out
    }
}

// ─── 3. Replacing a lexicon with nothing is suspicious ──────────────────────

struct EmptyLexiconRule;

impl ValidationRule for EmptyLexiconRule {
    fn name(&self) -> &str {
        "empty_lexicon"
    }

    fn validate(&self, spec: &AnalyzerSpec) -> Vec<ValidationDiagnostic> {
        word_lists(spec)
            .into_iter()
            .filter(|(_, list)| list.mode == ListMode::Replace && list.words.is_empty())
            .map(|(path, _)| {
                ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::EmptyLexicon,
                        format!("{path}/words"),
                        "replacing with an empty word list disables this lexicon",
                    )
                    .with_hint("Add words, or use \"extend\" to keep the defaults"),
                )
            })
            .collect()
    }
}

// ─── 4. Thresholds: finite, in [-1, 1], negative <= 0 <= positive ───────────

struct ThresholdsRule;

impl ValidationRule for ThresholdsRule {
    fn name(&self) -> &str {
        "thresholds"
    }

    fn validate(&self, spec: &AnalyzerSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let checks: [(&str, Option<f64>, bool); 2] = [
            ("positive", spec.thresholds.positive, true),
            ("negative", spec.thresholds.negative, false),
        ];

        for (field, value, is_positive) in checks {
            let Some(value) = value else { continue };
            let in_range = value.is_finite() && (-1.0..=1.0).contains(&value);
            let on_correct_side = if is_positive { value >= 0.0 } else { value <= 0.0 };

            if !in_range || !on_correct_side {
                let expected = if is_positive { "[0, 1]" } else { "[-1, 0]" };
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidThreshold,
                        format!("/thresholds/{field}"),
                        format!("{field} threshold {value} must be within {expected}"),
                    )
                    .with_hint(format!(
                        "Remove {field} to use the default, or pick a value in {expected}"
                    )),
                ));
            }
        }

        out
    }
}

// ─── 5. Keyword limits must be positive when set ────────────────────────────

struct KeywordLimitsRule;

impl ValidationRule for KeywordLimitsRule {
    fn name(&self) -> &str {
        "keyword_limits"
    }

    fn validate(&self, spec: &AnalyzerSpec) -> Vec<ValidationDiagnostic> {
        let checks: [(&str, Option<usize>); 2] = [
            ("max_keywords", spec.keywords.max_keywords),
            ("min_length", spec.keywords.min_length),
        ];

        checks
            .into_iter()
            .filter(|&(_, value)| value == Some(0))
            .map(|(field, _)| {
                ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::LimitOutOfRange,
                        format!("/keywords/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!(
                        "Remove {field} to use the default, or set it to a positive value"
                    )),
                )
            })
            .collect()
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a map of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &AnalyzerSpec) -> Vec<ValidationDiagnostic> {
        let strict = spec.strict;
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, strict));
        out.extend(Self::check_unknowns(
            "/lexicons",
            &spec.lexicons.unknown_fields,
            strict,
        ));
        for (path, list) in word_lists(spec) {
            out.extend(Self::check_unknowns(&path, &list.unknown_fields, strict));
        }
        out.extend(Self::check_unknowns(
            "/thresholds",
            &spec.thresholds.unknown_fields,
            strict,
        ));
        out.extend(Self::check_unknowns(
            "/keywords",
            &spec.keywords.unknown_fields,
            strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

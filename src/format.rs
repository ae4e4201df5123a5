//! Wire format for existing journal clients.
//!
//! Older callers read the sentiment fields under two names: the backend's
//! snake_case (`sentiment_score`, `sentiment_label`) and the web client's
//! camelCase (`sentimentScore`, `sentiment`). [`LegacyPayload`] carries both
//! so either kind of caller can consume it. [`AnalysisResult`] itself keeps a
//! single field set.

use serde::{Deserialize, Serialize};

use crate::types::{AnalysisResult, EmotionCounts, SentimentLabel, SentimentThresholds};

/// Dual-named JSON payload for an analysis result
///
/// Serialization always writes both spellings. Deserialization accepts either
/// one: backend records carry only `sentiment_score`/`sentiment_label` (and
/// may lack `emotions` and `keywords`), web client payloads only
/// `sentimentScore`/`sentiment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    #[serde(
        rename = "sentimentScore",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment_score_camel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_label: Option<SentimentLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentLabel>,
    #[serde(default)]
    pub emotions: EmotionCounts,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl From<AnalysisResult> for LegacyPayload {
    fn from(result: AnalysisResult) -> Self {
        Self {
            sentiment_score: Some(result.sentiment_score),
            sentiment_score_camel: Some(result.sentiment_score),
            sentiment_label: Some(result.sentiment_label),
            sentiment: Some(result.sentiment_label),
            emotions: result.emotions,
            keywords: result.keywords,
        }
    }
}

impl From<&AnalysisResult> for LegacyPayload {
    fn from(result: &AnalysisResult) -> Self {
        Self::from(result.clone())
    }
}

impl From<LegacyPayload> for AnalysisResult {
    /// The snake_case fields win when the two spellings disagree. A missing
    /// score reads as 0.0; a missing label is derived from the score with the
    /// default thresholds.
    fn from(payload: LegacyPayload) -> Self {
        let sentiment_score = payload
            .sentiment_score
            .or(payload.sentiment_score_camel)
            .unwrap_or(0.0);
        let sentiment_label = payload
            .sentiment_label
            .or(payload.sentiment)
            .unwrap_or_else(|| SentimentThresholds::default().label(sentiment_score));

        Self {
            sentiment_score,
            sentiment_label,
            emotions: payload.emotions,
            keywords: payload.keywords,
        }
    }
}

impl AnalysisResult {
    /// Serialize in the dual-named legacy shape
    pub fn to_legacy_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&LegacyPayload::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Emotion;

    fn sample() -> AnalysisResult {
        let mut emotions = EmotionCounts::new();
        emotions.set(Emotion::Joy, 2);
        AnalysisResult {
            sentiment_score: 0.5,
            sentiment_label: SentimentLabel::Positive,
            emotions,
            keywords: vec!["garden".into(), "sunny".into()],
        }
    }

    #[test]
    fn test_both_spellings_present() {
        let raw = sample().to_legacy_json().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["sentiment_score"], 0.5);
        assert_eq!(json["sentimentScore"], 0.5);
        assert_eq!(json["sentiment_label"], "positive");
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["emotions"]["joy"], 2);
        assert_eq!(json["keywords"][1], "sunny");
    }

    #[test]
    fn test_canonical_result_has_single_field_set() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("sentimentScore").is_none());
        assert!(json.get("sentiment").is_none());
        assert_eq!(json["sentiment_label"], "positive");
    }

    #[test]
    fn test_snake_case_wins_on_conflict() {
        let payload: LegacyPayload = serde_json::from_str(
            r#"{
                "sentiment_score": -0.4, "sentimentScore": 0.9,
                "sentiment_label": "negative", "sentiment": "positive",
                "emotions": {}, "keywords": []
            }"#,
        )
        .unwrap();
        let result = AnalysisResult::from(payload);
        assert_eq!(result.sentiment_score, -0.4);
        assert_eq!(result.sentiment_label, SentimentLabel::Negative);
    }

    #[test]
    fn test_backend_record_with_snake_case_only() {
        let payload: LegacyPayload =
            serde_json::from_str(r#"{ "sentiment_score": 0.35, "sentiment_label": "Positive" }"#)
                .unwrap();
        assert_eq!(payload.sentiment_score_camel, None);

        let result = AnalysisResult::from(payload);
        assert_eq!(result.sentiment_score, 0.35);
        assert_eq!(result.sentiment_label, SentimentLabel::Positive);
        assert_eq!(result.emotions.total(), 0);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_web_payload_with_camel_case_only() {
        let payload: LegacyPayload = serde_json::from_str(
            r#"{
                "sentimentScore": -0.5, "sentiment": "negative",
                "emotions": { "sadness": 3 }, "keywords": ["rainy"]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.sentiment_score, None);

        let result = AnalysisResult::from(payload);
        assert_eq!(result.sentiment_score, -0.5);
        assert_eq!(result.sentiment_label, SentimentLabel::Negative);
        assert_eq!(result.emotions.get(Emotion::Sadness), 3);
        assert_eq!(result.keywords, vec!["rainy"]);
    }

    #[test]
    fn test_missing_label_follows_score() {
        let payload: LegacyPayload = serde_json::from_str(r#"{ "sentimentScore": 0.6 }"#).unwrap();
        let result = AnalysisResult::from(payload);
        assert_eq!(result.sentiment_label, SentimentLabel::Positive);

        let result = AnalysisResult::from(serde_json::from_str::<LegacyPayload>("{}").unwrap());
        assert_eq!(result, AnalysisResult::neutral());
    }

    #[test]
    fn test_borrowed_and_owned_conversions_agree() {
        let result = sample();
        assert_eq!(LegacyPayload::from(&result), LegacyPayload::from(result));
    }
}

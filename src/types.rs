//! Core data types for journal text analysis
//!
//! [`AnalysisResult`] is the record returned by every analysis call. It is
//! built fresh per call and owns all of its data.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Overall sentiment label derived from the sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    #[serde(alias = "Positive")]
    Positive,
    #[serde(alias = "Negative")]
    Negative,
    #[default]
    #[serde(alias = "Neutral")]
    Neutral,
}

impl SentimentLabel {
    /// Returns the lower-case name used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score boundaries separating the three sentiment labels
///
/// A score strictly above `positive` is [`SentimentLabel::Positive`], strictly
/// below `negative` is [`SentimentLabel::Negative`], anything else is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentThresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: 0.2,
            negative: -0.2,
        }
    }
}

impl SentimentThresholds {
    /// Create thresholds, clamping both boundaries into `[-1, 1]`
    pub fn new(positive: f64, negative: f64) -> Self {
        Self {
            positive: positive.clamp(-1.0, 1.0),
            negative: negative.clamp(-1.0, 1.0),
        }
    }

    /// Map a score to its label
    pub fn label(&self, score: f64) -> SentimentLabel {
        if score > self.positive {
            SentimentLabel::Positive
        } else if score < self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// The six emotion categories tracked per entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
}

impl Emotion {
    /// All categories in their canonical order
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
        }
    }

    /// Position of this category in [`Emotion::ALL`]
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized emotion name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion \"{0}\"")]
pub struct UnknownEmotion(pub String);

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownEmotion(value.to_string()))
    }
}

/// Raw keyword counts per emotion category
///
/// Serializes as a JSON object keyed by emotion name, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmotionCounts {
    counts: [u32; 6],
}

impl EmotionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, emotion: Emotion) -> u32 {
        self.counts[emotion.index()]
    }

    pub fn set(&mut self, emotion: Emotion, count: u32) {
        self.counts[emotion.index()] = count;
    }

    /// Add `count` to a category, saturating at `u32::MAX`
    pub fn add(&mut self, emotion: Emotion, count: u32) {
        let slot = &mut self.counts[emotion.index()];
        *slot = slot.saturating_add(count);
    }

    /// Iterate `(emotion, count)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    /// Sum of all category counts
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Category with the highest count; ties go to the earlier category,
    /// `None` when every count is zero
    pub fn dominant(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, u32)> = None;
        for (emotion, count) in self.iter() {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((emotion, count));
            }
        }
        best.map(|(e, _)| e)
    }

    /// Counts scaled into `[0, 1]` by dividing by the largest count.
    ///
    /// This is a display helper; analysis itself only reports raw counts.
    /// All shares are zero when no emotion word matched.
    pub fn normalized(&self) -> Vec<(Emotion, f64)> {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        self.iter()
            .map(|(e, c)| {
                let share = if max == 0 {
                    0.0
                } else {
                    f64::from(c) / f64::from(max)
                };
                (e, share)
            })
            .collect()
    }

    /// Element-wise saturating sum
    pub fn merge(&mut self, other: &EmotionCounts) {
        for (emotion, count) in other.iter() {
            self.add(emotion, count);
        }
    }
}

impl Serialize for EmotionCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Emotion::ALL.len()))?;
        for (emotion, count) in self.iter() {
            map.serialize_entry(emotion.as_str(), &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EmotionCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Missing categories read as zero.
        let raw: HashMap<Emotion, u32> = HashMap::deserialize(deserializer)?;
        let mut counts = EmotionCounts::new();
        for (emotion, count) in raw {
            counts.set(emotion, count);
        }
        Ok(counts)
    }
}

/// Result of analyzing one block of text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sentiment score in `[-1, 1]`
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    /// Raw per-category emotion keyword counts
    pub emotions: EmotionCounts,
    /// Extracted keywords in first-seen order, deduplicated
    pub keywords: Vec<String>,
}

impl AnalysisResult {
    /// The result for text with no signal at all
    pub fn neutral() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_labels() {
        let t = SentimentThresholds::default();
        assert_eq!(t.label(1.0), SentimentLabel::Positive);
        assert_eq!(t.label(0.21), SentimentLabel::Positive);
        assert_eq!(t.label(0.2), SentimentLabel::Neutral); // strict boundary
        assert_eq!(t.label(0.0), SentimentLabel::Neutral);
        assert_eq!(t.label(-0.2), SentimentLabel::Neutral);
        assert_eq!(t.label(-0.5), SentimentLabel::Negative);
    }

    #[test]
    fn test_threshold_clamping() {
        let t = SentimentThresholds::new(3.0, -7.0);
        assert_eq!(t.positive, 1.0);
        assert_eq!(t.negative, -1.0);
        // Nothing can exceed 1.0, so no score is positive.
        assert_eq!(t.label(1.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_emotion_parse() {
        assert_eq!("joy".parse::<Emotion>(), Ok(Emotion::Joy));
        assert_eq!("Disgust".parse::<Emotion>(), Ok(Emotion::Disgust));
        assert!("boredom".parse::<Emotion>().is_err());
        for e in Emotion::ALL {
            assert_eq!(e.as_str().parse::<Emotion>(), Ok(e));
            assert_eq!(Emotion::ALL[e.index()], e);
        }
    }

    #[test]
    fn test_emotion_counts_serialize_in_order() {
        let mut counts = EmotionCounts::new();
        counts.set(Emotion::Fear, 2);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(
            json,
            r#"{"joy":0,"sadness":0,"anger":0,"fear":2,"surprise":0,"disgust":0}"#
        );
    }

    #[test]
    fn test_emotion_counts_deserialize_missing_as_zero() {
        let counts: EmotionCounts = serde_json::from_str(r#"{"anger":3}"#).unwrap();
        assert_eq!(counts.get(Emotion::Anger), 3);
        assert_eq!(counts.get(Emotion::Joy), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_normalized_and_dominant() {
        let mut counts = EmotionCounts::new();
        assert!(counts.dominant().is_none());
        assert!(counts.normalized().iter().all(|&(_, s)| s == 0.0));

        counts.set(Emotion::Joy, 4);
        counts.set(Emotion::Sadness, 2);
        counts.set(Emotion::Anger, 4);
        assert_eq!(counts.dominant(), Some(Emotion::Joy)); // tie -> earlier

        let shares = counts.normalized();
        assert_eq!(shares[0], (Emotion::Joy, 1.0));
        assert_eq!(shares[1], (Emotion::Sadness, 0.5));
        assert_eq!(shares[5], (Emotion::Disgust, 0.0));
    }

    #[test]
    fn test_merge_saturates() {
        let mut a = EmotionCounts::new();
        a.set(Emotion::Joy, u32::MAX - 1);
        let mut b = EmotionCounts::new();
        b.set(Emotion::Joy, 5);
        b.set(Emotion::Fear, 1);
        a.merge(&b);
        assert_eq!(a.get(Emotion::Joy), u32::MAX);
        assert_eq!(a.get(Emotion::Fear), 1);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }
}

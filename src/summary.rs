//! Aggregation across many analysis results
//!
//! Dashboards show totals over a user's entries: the emotion distribution,
//! a word cloud, the mix of labels and the average mood. [`AnalysisSummary`]
//! computes these from a sequence of [`AnalysisResult`]s.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::types::{AnalysisResult, EmotionCounts, SentimentLabel};

/// Number of results per sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }
}

/// How many results listed a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: usize,
}

/// Totals over a collection of results
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub entries: usize,
    /// Mean sentiment score; 0 for an empty collection
    pub mean_score: f64,
    pub labels: LabelCounts,
    /// Per-category sums of raw emotion counts
    pub emotions: EmotionCounts,
    /// Keyword frequencies in order of first appearance
    pub keywords: Vec<KeywordFrequency>,
}

impl AnalysisSummary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a AnalysisResult>,
    {
        let mut summary = Self::default();
        let mut score_sum = 0.0;
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for result in results {
            summary.entries += 1;
            score_sum += result.sentiment_score;
            summary.labels.record(result.sentiment_label);
            summary.emotions.merge(&result.emotions);

            // Keywords are already unique per result.
            for keyword in &result.keywords {
                match index.get(keyword) {
                    Some(&slot) => summary.keywords[slot].count += 1,
                    None => {
                        index.insert(keyword.clone(), summary.keywords.len());
                        summary.keywords.push(KeywordFrequency {
                            keyword: keyword.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }

        if summary.entries > 0 {
            summary.mean_score = score_sum / summary.entries as f64;
        }
        summary
    }

    /// The `n` most frequent keywords; ties keep first-appearance order
    pub fn top_keywords(&self, n: usize) -> Vec<&KeywordFrequency> {
        let mut ranked: Vec<&KeywordFrequency> = self.keywords.iter().collect();
        // Stable sort preserves first-appearance order among equal counts.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    /// Label with the most results; ties resolve neutral, then positive
    pub fn prevailing_label(&self) -> SentimentLabel {
        let order = [
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ];
        let mut best = SentimentLabel::Neutral;
        for label in order {
            if self.labels.get(label) > self.labels.get(best) {
                best = label;
            }
        }
        best
    }
}

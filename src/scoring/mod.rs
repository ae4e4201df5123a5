//! Scoring stages
//!
//! - [`sentiment`]: positive/negative lexicon polarity and label
//! - [`keywords`]: stopword-filtered keyword extraction
//!
//! Emotion counting is a direct lookup on
//! [`EmotionLexicon`](crate::lexicon::EmotionLexicon).

pub mod keywords;
pub mod sentiment;

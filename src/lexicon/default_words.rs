//! Default word lists for the sentiment and emotion lexicons.

use crate::types::Emotion;

pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "excellent",
    "wonderful",
    "joy",
    "love",
    "amazing",
    "awesome",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "terrible",
    "awful",
    "hate",
    "angry",
    "depressed",
    "anxious",
    "worried",
];

pub const JOY_WORDS: &[&str] = &["happy", "joy", "excited", "delighted", "wonderful"];

pub const SADNESS_WORDS: &[&str] = &["sad", "depressed", "unhappy", "miserable", "blue"];

pub const ANGER_WORDS: &[&str] = &["angry", "furious", "mad", "irritated", "annoyed"];

pub const FEAR_WORDS: &[&str] = &["afraid", "scared", "anxious", "worried", "nervous"];

pub const SURPRISE_WORDS: &[&str] = &["surprised", "shocked", "amazed", "astonished", "stunned"];

pub const DISGUST_WORDS: &[&str] = &["disgusted", "repulsed", "sick", "revolted"];

/// Default keyword list for an emotion category
pub fn emotion_words(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => JOY_WORDS,
        Emotion::Sadness => SADNESS_WORDS,
        Emotion::Anger => ANGER_WORDS,
        Emotion::Fear => FEAR_WORDS,
        Emotion::Surprise => SURPRISE_WORDS,
        Emotion::Disgust => DISGUST_WORDS,
    }
}

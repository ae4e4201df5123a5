//! Word lexicons
//!
//! A [`Lexicon`] is a set of lower-case words matched against a
//! [`TokenStream`] as whole words. [`EmotionLexicon`] holds one lexicon per
//! [`Emotion`]. The default word lists live in [`default_words`] as
//! `'static` data; a lexicon copies them into a hash set once at build time.

pub mod default_words;

use rustc_hash::FxHashSet;

use crate::nlp::tokenizer::TokenStream;
use crate::types::{Emotion, EmotionCounts};

/// A set of words counted by whole-word match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lexicon from a word list (stored lower-cased)
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut lexicon = Self::new();
        lexicon.add_words(words);
        lexicon
    }

    pub fn add_words<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn remove_words<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check membership (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sorted copy of the words, for display and diffing
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Count whole-word occurrences of any lexicon word in `tokens`.
    ///
    /// Every occurrence counts, so a word repeated three times adds three.
    pub fn count_matches(&self, tokens: &TokenStream) -> u32 {
        if self.words.is_empty() {
            return 0;
        }
        let hits = tokens.iter().filter(|t| self.words.contains(*t)).count();
        u32::try_from(hits).unwrap_or(u32::MAX)
    }
}

/// One lexicon per emotion category
///
/// Categories are independent: a word listed under two emotions counts
/// toward both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionLexicon {
    categories: [Lexicon; 6],
}

impl Default for EmotionLexicon {
    fn default() -> Self {
        Self {
            categories: Emotion::ALL
                .map(|e| Lexicon::from_words(default_words::emotion_words(e))),
        }
    }
}

impl EmotionLexicon {
    /// An emotion lexicon with every category empty
    pub fn empty() -> Self {
        Self {
            categories: Default::default(),
        }
    }

    pub fn category(&self, emotion: Emotion) -> &Lexicon {
        &self.categories[emotion.index()]
    }

    pub fn category_mut(&mut self, emotion: Emotion) -> &mut Lexicon {
        &mut self.categories[emotion.index()]
    }

    /// Replace one category's word list
    pub fn set_category(&mut self, emotion: Emotion, lexicon: Lexicon) {
        self.categories[emotion.index()] = lexicon;
    }

    /// Count matches for every category
    pub fn count(&self, tokens: &TokenStream) -> EmotionCounts {
        let mut counts = EmotionCounts::new();
        for emotion in Emotion::ALL {
            counts.set(emotion, self.category(emotion).count_matches(tokens));
        }
        counts
    }
}

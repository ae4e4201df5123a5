//! Word tokenization
//!
//! Splits lower-cased text into maximal runs of word characters
//! (`[a-z0-9_]` after lower-casing). Every other character is a boundary, so
//! a token always matches a lexicon word as a whole word, never as a fragment
//! of a longer one.

use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII-only `\w+`; accented letters stay boundaries
static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\w)+").unwrap());

/// Returns `true` for characters that can appear inside a token
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if `word` is a single, non-empty run of word characters
pub fn is_single_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_word_char)
}

/// Lower-cased text plus the byte spans of its tokens, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    text: String,
    spans: Vec<(usize, usize)>,
}

impl TokenStream {
    /// Lower-case `text` and tokenize it
    pub fn new(text: &str) -> Self {
        let text = text.to_lowercase();
        let spans = WORD_RUN
            .find_iter(&text)
            .map(|m| (m.start(), m.end()))
            .collect();

        Self { text, spans }
    }

    /// The lower-cased source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Token at position `idx`
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.spans.get(idx).map(|&(s, e)| &self.text[s..e])
    }

    /// Iterate tokens in document order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(move |&(s, e)| &self.text[s..e])
    }
}

/// Tokenize `text` (convenience for [`TokenStream::new`])
pub fn tokenize(text: &str) -> TokenStream {
    TokenStream::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text).iter().map(str::to_string).collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(words("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
        assert!(tokenize("?!... --").is_empty());
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(
            words("snake_case v2 2024-01-05"),
            vec!["snake_case", "v2", "2024", "01", "05"]
        );
    }

    #[test]
    fn test_apostrophes_split() {
        assert_eq!(words("I'm can't"), vec!["i", "m", "can", "t"]);
    }

    #[test]
    fn test_non_ascii_letters_are_boundaries() {
        // Accented letters are not word characters.
        assert_eq!(words("café happy"), vec!["caf", "happy"]);
        assert_eq!(words("naïve"), vec!["na", "ve"]);
    }

    #[test]
    fn test_positions() {
        let stream = tokenize("Good  DAY");
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.get(0), Some("good"));
        assert_eq!(stream.get(1), Some("day"));
        assert_eq!(stream.get(2), None);
        assert_eq!(stream.text(), "good  day");
    }

    #[test]
    fn test_tokens_are_maximal_word_char_runs() {
        let text = "Ça va? well-being, 😀happy_days99 ÉTÉ naïve x";
        let stream = tokenize(text);
        let lowered = stream.text();

        let mut expected = Vec::new();
        let mut current = String::new();
        for c in lowered.chars() {
            if is_word_char(c) {
                current.push(c);
            } else if !current.is_empty() {
                expected.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            expected.push(current);
        }

        assert_eq!(words(text), expected);
        assert!(stream.iter().all(is_single_word));
        assert_eq!(
            words(text),
            vec!["a", "va", "well", "being", "happy_days99", "t", "na", "ve", "x"]
        );
    }

    #[test]
    fn test_is_single_word() {
        assert!(is_single_word("happy"));
        assert!(is_single_word("snake_case"));
        assert!(!is_single_word(""));
        assert!(!is_single_word("well-being"));
        assert!(!is_single_word("two words"));
        assert!(!is_single_word("café"));
    }
}

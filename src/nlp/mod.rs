//! Text preprocessing
//!
//! Word tokenization over lower-cased text, and stopword filtering for
//! keyword extraction.

pub mod stopwords;
pub mod tokenizer;

//! # WSD Text
//!
//! Tokenization, stopword and punctuation filtering, part-of-speech tagging
//! and lemmatization for the disambiguation engine.
//!
//! The engine only sees the [`TextProcessor`] trait. [`EnglishTextProcessor`]
//! is the bundled implementation; it consults a
//! [`LexicalDatabase`](wsd_lexicon::LexicalDatabase) to tag and lemmatize.

mod error;
mod morphy;
mod processor;
mod stopwords;
mod tagger;
mod tokenizer;

use std::sync::Arc;

use wsd_lexicon::Pos;

pub use error::{Result, TextError};
pub use morphy::Morphy;
pub use processor::EnglishTextProcessor;
pub use stopwords::is_stopword;
pub use tagger::pos_from_penn_tag;
pub use tokenizer::{is_punctuation, tokenize};

/// NLP utilities consumed by the gloss scorer and the disambiguator
pub trait TextProcessor {
    /// Ordered tokens of `text`
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// `(token, tag)` pairs in input order
    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<(String, String)>>;

    /// Base form of `token` read as `pos`
    fn lemmatize(&self, token: &str, pos: Pos) -> Result<String>;

    fn is_stopword(&self, token: &str) -> bool;

    fn is_punctuation(&self, token: &str) -> bool;

    fn remove_stopwords(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.is_stopword(token))
            .cloned()
            .collect()
    }

    fn remove_punctuation(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.is_punctuation(token))
            .cloned()
            .collect()
    }

    /// Part of speech encoded by a tag, `None` when it has none
    fn pos_from_tag(&self, tag: &str) -> Option<Pos> {
        pos_from_penn_tag(tag)
    }
}

impl<T: TextProcessor + ?Sized> TextProcessor for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        (**self).tokenize(text)
    }

    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<(String, String)>> {
        (**self).pos_tag(tokens)
    }

    fn lemmatize(&self, token: &str, pos: Pos) -> Result<String> {
        (**self).lemmatize(token, pos)
    }

    fn is_stopword(&self, token: &str) -> bool {
        (**self).is_stopword(token)
    }

    fn is_punctuation(&self, token: &str) -> bool {
        (**self).is_punctuation(token)
    }

    fn pos_from_tag(&self, tag: &str) -> Option<Pos> {
        (**self).pos_from_tag(tag)
    }
}

impl<T: TextProcessor + ?Sized> TextProcessor for Arc<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        (**self).tokenize(text)
    }

    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<(String, String)>> {
        (**self).pos_tag(tokens)
    }

    fn lemmatize(&self, token: &str, pos: Pos) -> Result<String> {
        (**self).lemmatize(token, pos)
    }

    fn is_stopword(&self, token: &str) -> bool {
        (**self).is_stopword(token)
    }

    fn is_punctuation(&self, token: &str) -> bool {
        (**self).is_punctuation(token)
    }

    fn pos_from_tag(&self, tag: &str) -> Option<Pos> {
        (**self).pos_from_tag(tag)
    }
}

//! # WSD Lexicon
//!
//! Read-only access to a WordNet-style lexical database: senses, their
//! glosses, and the glosses reachable through lexical relations.
//!
//! ## Architecture
//!
//! ```text
//! lexicon.json
//!     │
//!     └──> InMemoryLexicon (implements LexicalDatabase)
//!            ├─ senses_of(lemma)        ordered, deterministic
//!            ├─ gloss_via_relation()    definition / examples / related definitions
//!            └─ has_lemma(lemma, pos)   used by the lemmatizer
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wsd_lexicon::{InMemoryLexicon, LexicalDatabase, Pos, Relation, Sense};
//!
//! let lexicon = InMemoryLexicon::from_senses([
//!     Sense::new("cone.n.01", Pos::Noun, "a shape whose base is a circle")
//!         .related(Relation::Hypernyms, "shape.n.02"),
//!     Sense::new("shape.n.02", Pos::Noun, "the spatial arrangement of something"),
//! ])
//! .unwrap();
//!
//! let cone = &lexicon.senses_of("cone").unwrap()[0];
//! let hypernym_gloss = lexicon.gloss_via_relation(cone, Relation::Hypernyms).unwrap();
//! assert_eq!(hypernym_gloss, "the spatial arrangement of something");
//! ```

mod error;
mod memory;
mod types;

use std::sync::Arc;

pub use error::{LexiconError, Result};
pub use memory::InMemoryLexicon;
pub use types::{Pos, Relation, Sense, SenseId};

/// Read-only lexical database consumed by the disambiguation engine.
///
/// Implementations must return senses in a stable order: ties during
/// disambiguation are broken by that order.
pub trait LexicalDatabase {
    /// All senses carrying `lemma`, in database order
    fn senses_of(&self, lemma: &str) -> Result<Vec<Sense>>;

    /// Text obtained by following `relation` from `sense`.
    /// Empty when the sense has no such relation.
    fn gloss_via_relation(&self, sense: &Sense, relation: Relation) -> Result<String>;

    /// Whether `lemma` has at least one sense with part of speech `pos`
    fn has_lemma(&self, lemma: &str, pos: Pos) -> Result<bool>;
}

impl<T: LexicalDatabase + ?Sized> LexicalDatabase for &T {
    fn senses_of(&self, lemma: &str) -> Result<Vec<Sense>> {
        (**self).senses_of(lemma)
    }

    fn gloss_via_relation(&self, sense: &Sense, relation: Relation) -> Result<String> {
        (**self).gloss_via_relation(sense, relation)
    }

    fn has_lemma(&self, lemma: &str, pos: Pos) -> Result<bool> {
        (**self).has_lemma(lemma, pos)
    }
}

impl<T: LexicalDatabase + ?Sized> LexicalDatabase for Arc<T> {
    fn senses_of(&self, lemma: &str) -> Result<Vec<Sense>> {
        (**self).senses_of(lemma)
    }

    fn gloss_via_relation(&self, sense: &Sense, relation: Relation) -> Result<String> {
        (**self).gloss_via_relation(sense, relation)
    }

    fn has_lemma(&self, lemma: &str, pos: Pos) -> Result<bool> {
        (**self).has_lemma(lemma, pos)
    }
}

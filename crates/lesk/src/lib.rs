//! # WSD Lesk
//!
//! Word-sense disambiguation with the Adapted Lesk algorithm
//! (Banerjee & Pedersen): the sense of a target word is the one whose
//! extended glosses overlap most with the senses of the surrounding words.
//!
//! ## Architecture
//!
//! ```text
//! (word, sentence, pos?)
//!     │
//!     └──> Disambiguator
//!          ├─> normalize sentence (tokens → lemmas)
//!          ├─> context window around the target lemma
//!          │    └─> not found: GuessSink + first listed sense
//!          └─> candidate × context sense
//!               └─> Relatedness (relation pairs per POS)
//!                    └─> GlossScorer (Σ n² over masked overlaps)
//!                         └─> longest_overlap_span
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wsd_lesk::{Disambiguator, LeskConfig, MemoryGuessSink};
//! use wsd_lexicon::{InMemoryLexicon, Pos, Sense};
//! use wsd_text::EnglishTextProcessor;
//!
//! let lexicon = InMemoryLexicon::from_senses([
//!     Sense::new("bass.n.01", Pos::Noun, "the lowest part of the musical range"),
//!     Sense::new("bass.n.02", Pos::Noun, "any of numerous edible marine fishes"),
//!     Sense::new("fish.v.01", Pos::Verb, "catch fishes by using a line and hook"),
//! ])
//! .unwrap();
//!
//! let wsd = Disambiguator::new(&lexicon, EnglishTextProcessor::new(&lexicon), LeskConfig::default())
//!     .with_sink(Arc::new(MemoryGuessSink::new()));
//!
//! let sense = wsd.disambiguate("bass", "I went fishing for a bass", None).unwrap();
//! assert_eq!(sense.id.as_str(), "bass.n.02");
//! ```

mod config;
mod disambiguator;
mod error;
mod guess_log;
mod overlap;
mod relations;
mod scorer;
mod similarity;
mod window;

pub use config::LeskConfig;
pub use disambiguator::{CandidateScore, Disambiguation, Disambiguator, Outcome};
pub use error::{LeskError, Result};
pub use guess_log::{guess_line, FileGuessSink, GuessSink, MemoryGuessSink};
pub use overlap::{longest_overlap_span, overlap, OverlapSpan};
pub use relations::{RelationPair, RelationPairTable};
pub use scorer::{GlossScorer, Score};
pub use similarity::Relatedness;
pub use window::context_window;

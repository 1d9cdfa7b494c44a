use serde::{Deserialize, Serialize};
use wsd_lexicon::Relation::{
    AlsoSee, Attributes, Examples, Gloss, Holonyms, Hypernyms, Hyponyms, Meronyms, Similar,
};
use wsd_lexicon::{Pos, Relation};

/// Which gloss of each sense gets compared: `(first sense, second sense)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationPair(pub Relation, pub Relation);

const NOUN_PAIRS: &[RelationPair] = &[
    RelationPair(Gloss, Gloss),
    RelationPair(Hypernyms, Hypernyms),
    RelationPair(Hyponyms, Hyponyms),
    RelationPair(Hypernyms, Gloss),
    RelationPair(Gloss, Hypernyms),
    RelationPair(Hyponyms, Gloss),
    RelationPair(Gloss, Hyponyms),
    RelationPair(Meronyms, Gloss),
    RelationPair(Gloss, Meronyms),
    RelationPair(Holonyms, Gloss),
    RelationPair(Gloss, Holonyms),
    RelationPair(Examples, Examples),
    RelationPair(Examples, Gloss),
    RelationPair(Gloss, Examples),
];

const VERB_PAIRS: &[RelationPair] = &[
    RelationPair(Gloss, Gloss),
    RelationPair(Hypernyms, Hypernyms),
    RelationPair(Hyponyms, Hyponyms),
    RelationPair(Hypernyms, Gloss),
    RelationPair(Gloss, Hypernyms),
    RelationPair(Hyponyms, Gloss),
    RelationPair(Gloss, Hyponyms),
    RelationPair(AlsoSee, Gloss),
    RelationPair(Gloss, AlsoSee),
    RelationPair(Examples, Examples),
    RelationPair(Examples, Gloss),
    RelationPair(Gloss, Examples),
];

const ADJECTIVE_PAIRS: &[RelationPair] = &[
    RelationPair(Gloss, Gloss),
    RelationPair(AlsoSee, AlsoSee),
    RelationPair(AlsoSee, Gloss),
    RelationPair(Gloss, AlsoSee),
    RelationPair(Similar, Similar),
    RelationPair(Similar, Gloss),
    RelationPair(Gloss, Similar),
    RelationPair(Attributes, Gloss),
    RelationPair(Gloss, Attributes),
    RelationPair(Examples, Examples),
    RelationPair(Examples, Gloss),
    RelationPair(Gloss, Examples),
];

const ADVERB_PAIRS: &[RelationPair] = &[
    RelationPair(Gloss, Gloss),
    RelationPair(Examples, Examples),
    RelationPair(Examples, Gloss),
    RelationPair(Gloss, Examples),
];

/// Relation pairs compared for each part of speech.
///
/// Defaults follow Banerjee & Pedersen. A part of speech left empty (or an
/// unknown one) contributes no similarity at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationPairTable {
    #[serde(default = "default_noun_pairs")]
    pub noun: Vec<RelationPair>,

    #[serde(default = "default_verb_pairs")]
    pub verb: Vec<RelationPair>,

    #[serde(default = "default_adjective_pairs")]
    pub adjective: Vec<RelationPair>,

    #[serde(default = "default_adverb_pairs")]
    pub adverb: Vec<RelationPair>,
}

fn default_noun_pairs() -> Vec<RelationPair> {
    NOUN_PAIRS.to_vec()
}

fn default_verb_pairs() -> Vec<RelationPair> {
    VERB_PAIRS.to_vec()
}

fn default_adjective_pairs() -> Vec<RelationPair> {
    ADJECTIVE_PAIRS.to_vec()
}

fn default_adverb_pairs() -> Vec<RelationPair> {
    ADVERB_PAIRS.to_vec()
}

impl Default for RelationPairTable {
    fn default() -> Self {
        Self {
            noun: default_noun_pairs(),
            verb: default_verb_pairs(),
            adjective: default_adjective_pairs(),
            adverb: default_adverb_pairs(),
        }
    }
}

impl RelationPairTable {
    /// Table with no pairs for any part of speech
    pub fn empty() -> Self {
        Self {
            noun: Vec::new(),
            verb: Vec::new(),
            adjective: Vec::new(),
            adverb: Vec::new(),
        }
    }

    /// Only compare the senses' own definitions (classic Lesk)
    pub fn gloss_only() -> Self {
        let pairs = vec![RelationPair(Gloss, Gloss)];
        Self {
            noun: pairs.clone(),
            verb: pairs.clone(),
            adjective: pairs.clone(),
            adverb: pairs,
        }
    }

    /// Pairs configured for `pos`; empty when `pos` is unknown
    pub fn pairs(&self, pos: Option<Pos>) -> &[RelationPair] {
        match pos {
            Some(Pos::Noun) => &self.noun,
            Some(Pos::Verb) => &self.verb,
            Some(Pos::Adjective) => &self.adjective,
            Some(Pos::Adverb) => &self.adverb,
            None => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        Pos::ALL.into_iter().all(|pos| self.pairs(Some(pos)).is_empty())
    }
}

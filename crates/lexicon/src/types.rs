use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

/// Part of speech of a sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Noun,
    Verb,
    #[serde(alias = "adj")]
    Adjective,
    #[serde(alias = "adv")]
    Adverb,
}

impl Pos {
    /// All parts of speech in lookup order
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adjective",
            Pos::Adverb => "adverb",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pos {
    type Err = LexiconError;

    /// Accepts full names, common abbreviations and WordNet codes.
    /// Adjective satellites (`s`) fold into [`Pos::Adjective`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(Pos::Noun),
            "v" | "verb" => Ok(Pos::Verb),
            "a" | "s" | "adj" | "adjective" => Ok(Pos::Adjective),
            "r" | "adv" | "adverb" => Ok(Pos::Adverb),
            other => Err(LexiconError::unknown_pos(other)),
        }
    }
}

/// Opaque sense identifier, e.g. `bank.n.01`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenseId(String);

impl SenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lemma encoded in a WordNet-style id (`bank.n.01` -> `bank`)
    #[must_use]
    pub fn lemma_prefix(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for SenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SenseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Named source of gloss text for a sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// The sense's own definition
    Gloss,
    /// The sense's example sentences
    Examples,
    Hypernyms,
    Hyponyms,
    Meronyms,
    Holonyms,
    AlsoSee,
    Similar,
    Attributes,
}

impl Relation {
    pub const ALL: [Relation; 9] = [
        Relation::Gloss,
        Relation::Examples,
        Relation::Hypernyms,
        Relation::Hyponyms,
        Relation::Meronyms,
        Relation::Holonyms,
        Relation::AlsoSee,
        Relation::Similar,
        Relation::Attributes,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Relation::Gloss => "gloss",
            Relation::Examples => "examples",
            Relation::Hypernyms => "hypernyms",
            Relation::Hyponyms => "hyponyms",
            Relation::Meronyms => "meronyms",
            Relation::Holonyms => "holonyms",
            Relation::AlsoSee => "also_see",
            Relation::Similar => "similar",
            Relation::Attributes => "attributes",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|relation| relation.as_str() == s.trim())
            .ok_or_else(|| LexiconError::unknown_relation(s))
    }
}

/// One meaning of a word as stored in the lexical database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub id: SenseId,

    pub pos: Pos,

    /// Word forms that carry this sense (lower-case, `_` for spaces)
    #[serde(default)]
    pub lemmas: Vec<String>,

    /// Definition text
    pub definition: String,

    /// Example sentences
    #[serde(default)]
    pub examples: Vec<String>,

    /// Links to other senses, keyed by pointer relation
    #[serde(default)]
    pub relations: BTreeMap<Relation, Vec<SenseId>>,
}

impl Sense {
    pub fn new(id: impl Into<SenseId>, pos: Pos, definition: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pos,
            lemmas: Vec::new(),
            definition: definition.into(),
            examples: Vec::new(),
            relations: BTreeMap::new(),
        }
    }

    /// Builder: add a lemma
    #[must_use]
    pub fn lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemmas.push(lemma.into());
        self
    }

    /// Builder: add an example sentence
    #[must_use]
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Builder: link to another sense
    #[must_use]
    pub fn related(mut self, relation: Relation, target: impl Into<SenseId>) -> Self {
        self.relations.entry(relation).or_default().push(target.into());
        self
    }

    #[must_use]
    pub const fn part_of_speech(&self) -> Pos {
        self.pos
    }

    /// Senses linked through `relation`, in stored order
    #[must_use]
    pub fn targets(&self, relation: Relation) -> &[SenseId] {
        self.relations
            .get(&relation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

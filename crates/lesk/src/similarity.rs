use std::collections::HashMap;

use wsd_lexicon::{LexicalDatabase, Pos, Relation, Sense, SenseId};
use wsd_text::TextProcessor;

use crate::error::Result;
use crate::relations::{RelationPair, RelationPairTable};
use crate::scorer::{GlossScorer, Score};

/// Extended gloss overlap between two senses.
///
/// Sums the gloss score of every configured relation pair. Normalized glosses
/// are cached per `(sense, relation)` for the lifetime of this value, which
/// the disambiguator keeps to a single call.
pub struct Relatedness<'a, L: ?Sized, P: ?Sized> {
    lexicon: &'a L,
    text: &'a P,
    pairs: &'a RelationPairTable,
    glosses: HashMap<(SenseId, Relation), Vec<String>>,
}

impl<'a, L, P> Relatedness<'a, L, P>
where
    L: LexicalDatabase + ?Sized,
    P: TextProcessor + ?Sized,
{
    pub fn new(lexicon: &'a L, text: &'a P, pairs: &'a RelationPairTable) -> Self {
        Self {
            lexicon,
            text,
            pairs,
            glosses: HashMap::new(),
        }
    }

    /// Similarity of `first` and `second` under the relation pairs for `pos`
    pub fn similarity(&mut self, first: &Sense, second: &Sense, pos: Option<Pos>) -> Result<Score> {
        let table: &'a RelationPairTable = self.pairs;
        let mut total: Score = 0;

        for &RelationPair(first_relation, second_relation) in table.pairs(pos) {
            self.cache_gloss(first, first_relation)?;
            self.cache_gloss(second, second_relation)?;

            let first_gloss = &self.glosses[&(first.id.clone(), first_relation)];
            let second_gloss = &self.glosses[&(second.id.clone(), second_relation)];
            total += GlossScorer::new(self.text).score_tokens(first_gloss, second_gloss);
        }

        Ok(total)
    }

    /// Number of normalized glosses held by the cache
    pub fn cached_glosses(&self) -> usize {
        self.glosses.len()
    }

    fn cache_gloss(&mut self, sense: &Sense, relation: Relation) -> Result<()> {
        let key = (sense.id.clone(), relation);
        if self.glosses.contains_key(&key) {
            return Ok(());
        }
        let raw = self.lexicon.gloss_via_relation(sense, relation)?;
        let tokens = GlossScorer::new(self.text).normalize(&raw)?;
        self.glosses.insert(key, tokens);
        Ok(())
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};
use crate::types::{Pos, Relation, Sense, SenseId};
use crate::LexicalDatabase;

/// On-disk layout of a lexicon file
#[derive(Debug, Default, Serialize, Deserialize)]
struct LexiconFile {
    senses: Vec<Sense>,
}

/// Lexical database held entirely in memory.
///
/// Senses keep insertion order; `senses_of` returns them in that order,
/// which is what tie-breaking during disambiguation relies on.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLexicon {
    senses: Vec<Sense>,
    by_id: HashMap<SenseId, usize>,
    by_lemma: HashMap<String, Vec<usize>>,
}

impl InMemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon and check that every relation resolves
    pub fn from_senses(senses: impl IntoIterator<Item = Sense>) -> Result<Self> {
        let mut lexicon = Self::new();
        for sense in senses {
            lexicon.insert(sense)?;
        }
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Parse the JSON layout `{ "senses": [ ... ] }`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::from_senses(file.senses)
    }

    /// Load a JSON lexicon file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&raw)?;
        log::debug!(
            "Loaded {} senses ({} lemmas) from {}",
            lexicon.len(),
            lexicon.by_lemma.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Add a sense. Relations are not checked until [`Self::validate`].
    pub fn insert(&mut self, mut sense: Sense) -> Result<()> {
        if self.by_id.contains_key(&sense.id) {
            return Err(LexiconError::DuplicateSense(sense.id.to_string()));
        }

        if sense.lemmas.is_empty() {
            sense.lemmas.push(sense.id.lemma_prefix().to_string());
        }
        for lemma in &mut sense.lemmas {
            *lemma = normalize_lemma(lemma);
        }
        let dropped_gloss = sense.relations.remove(&Relation::Gloss).is_some();
        let dropped_examples = sense.relations.remove(&Relation::Examples).is_some();
        if dropped_gloss || dropped_examples {
            log::warn!("Sense {} lists non-pointer relations; ignoring them", sense.id);
        }

        let index = self.senses.len();
        for lemma in &sense.lemmas {
            let slots = self.by_lemma.entry(lemma.clone()).or_default();
            if !slots.contains(&index) {
                slots.push(index);
            }
        }
        self.by_id.insert(sense.id.clone(), index);
        self.senses.push(sense);
        Ok(())
    }

    /// Check that every relation target exists
    pub fn validate(&self) -> Result<()> {
        for sense in &self.senses {
            for target in sense.relations.values().flatten() {
                if !self.by_id.contains_key(target) {
                    return Err(LexiconError::DanglingRelation {
                        from: sense.id.to_string(),
                        to: target.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &SenseId) -> Option<&Sense> {
        self.by_id.get(id).map(|&index| &self.senses[index])
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Serialize back to the JSON file layout
    pub fn to_json_string(&self) -> Result<String> {
        let file = LexiconFile {
            senses: self.senses.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

impl LexicalDatabase for InMemoryLexicon {
    fn senses_of(&self, lemma: &str) -> Result<Vec<Sense>> {
        let key = normalize_lemma(lemma);
        Ok(self
            .by_lemma
            .get(&key)
            .map(|slots| slots.iter().map(|&index| self.senses[index].clone()).collect())
            .unwrap_or_default())
    }

    fn gloss_via_relation(&self, sense: &Sense, relation: Relation) -> Result<String> {
        let text = match relation {
            Relation::Gloss => sense.definition.clone(),
            Relation::Examples => sense.examples.join(" "),
            pointer => sense
                .targets(pointer)
                .iter()
                .filter_map(|id| {
                    let target = self.get(id);
                    if target.is_none() {
                        log::debug!("Skipping unresolved {pointer} target {id} of {}", sense.id);
                    }
                    target
                })
                .map(|target| target.definition.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        };
        Ok(text)
    }

    fn has_lemma(&self, lemma: &str, pos: Pos) -> Result<bool> {
        Ok(self
            .by_lemma
            .get(&normalize_lemma(lemma))
            .is_some_and(|slots| slots.iter().any(|&index| self.senses[index].pos == pos)))
    }
}

/// Lower-case a lemma and join multi-word forms with `_`
fn normalize_lemma(lemma: &str) -> String {
    lemma
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> InMemoryLexicon {
        InMemoryLexicon::from_senses([
            Sense::new("bank.n.01", Pos::Noun, "sloping land beside a body of water")
                .example("they pulled the canoe up on the bank")
                .related(Relation::Hypernyms, "slope.n.01"),
            Sense::new("bank.n.02", Pos::Noun, "a financial institution")
                .example("he cashed a check at the bank")
                .example("that bank holds the mortgage"),
            Sense::new("bank.v.01", Pos::Verb, "do business with a bank"),
            Sense::new("slope.n.01", Pos::Noun, "an elevated geological formation"),
        ])
        .unwrap()
    }

    #[test]
    fn senses_keep_insertion_order() {
        let lexicon = sample();
        let ids: Vec<_> = lexicon
            .senses_of("Bank")
            .unwrap()
            .into_iter()
            .map(|sense| sense.id.to_string())
            .collect();
        assert_eq!(ids, vec!["bank.n.01", "bank.n.02", "bank.v.01"]);
    }

    #[test]
    fn unknown_lemma_has_no_senses() {
        assert!(sample().senses_of("river").unwrap().is_empty());
    }

    #[test]
    fn glosses_follow_relations() {
        let lexicon = sample();
        let bank = lexicon.get(&SenseId::new("bank.n.01")).unwrap().clone();
        let bank2 = lexicon.get(&SenseId::new("bank.n.02")).unwrap().clone();

        assert_eq!(
            lexicon.gloss_via_relation(&bank, Relation::Gloss).unwrap(),
            "sloping land beside a body of water"
        );
        assert_eq!(
            lexicon.gloss_via_relation(&bank, Relation::Hypernyms).unwrap(),
            "an elevated geological formation"
        );
        assert_eq!(
            lexicon.gloss_via_relation(&bank2, Relation::Examples).unwrap(),
            "he cashed a check at the bank that bank holds the mortgage"
        );
        assert_eq!(lexicon.gloss_via_relation(&bank, Relation::Meronyms).unwrap(), "");
    }

    #[test]
    fn has_lemma_checks_part_of_speech() {
        let lexicon = sample();
        assert!(lexicon.has_lemma("bank", Pos::Verb).unwrap());
        assert!(!lexicon.has_lemma("slope", Pos::Verb).unwrap());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = InMemoryLexicon::from_senses([
            Sense::new("cone.n.01", Pos::Noun, "a shape"),
            Sense::new("cone.n.01", Pos::Noun, "a seed"),
        ])
        .unwrap_err();
        assert!(matches!(err, LexiconError::DuplicateSense(id) if id == "cone.n.01"));
    }

    #[test]
    fn dangling_relations_are_rejected() {
        let err = InMemoryLexicon::from_senses([Sense::new("cone.n.01", Pos::Noun, "a shape")
            .related(Relation::Hypernyms, "shape.n.02")])
        .unwrap_err();
        assert!(matches!(err, LexiconError::DanglingRelation { .. }));
    }

    #[test]
    fn multi_word_lemmas_are_joined() {
        let lexicon = InMemoryLexicon::from_senses([Sense::new(
            "financial_institution.n.01",
            Pos::Noun,
            "an institution that conducts financial transactions",
        )
        .lemma("Financial Institution")])
        .unwrap();
        assert_eq!(lexicon.senses_of("financial_institution").unwrap().len(), 1);
    }
}

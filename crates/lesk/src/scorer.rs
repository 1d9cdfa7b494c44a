use wsd_text::TextProcessor;

use crate::error::Result;
use crate::overlap::longest_overlap_span;

/// Non-negative similarity score
pub type Score = u64;

/// Which gloss a masked span came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

/// Token slot inside a gloss being scored.
/// Masks carry their side so a masked span never matches the other gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<'a> {
    Word(&'a str),
    Masked(Side),
}

/// Scores gloss pairs by repeatedly extracting and masking their longest
/// shared phrase. Each phrase of `n` tokens adds `n²`, unless it is made only
/// of stopwords.
pub struct GlossScorer<'a, P: ?Sized> {
    text: &'a P,
}

impl<'a, P: TextProcessor + ?Sized> GlossScorer<'a, P> {
    pub fn new(text: &'a P) -> Self {
        Self { text }
    }

    /// Tokenize, drop punctuation and lower-case a gloss
    pub fn normalize(&self, gloss: &str) -> Result<Vec<String>> {
        let tokens = self.text.tokenize(gloss)?;
        Ok(self
            .text
            .remove_punctuation(&tokens)
            .into_iter()
            .map(|token| token.to_lowercase())
            .collect())
    }

    /// Score two raw glosses
    pub fn score(&self, first: &str, second: &str) -> Result<Score> {
        let first = self.normalize(first)?;
        let second = self.normalize(second)?;
        Ok(self.score_tokens(&first, &second))
    }

    /// Score two already normalized glosses
    pub fn score_tokens(&self, first: &[String], second: &[String]) -> Score {
        let mut first: Vec<Slot<'_>> = first.iter().map(|t| Slot::Word(t.as_str())).collect();
        let mut second: Vec<Slot<'_>> = second.iter().map(|t| Slot::Word(t.as_str())).collect();
        let mut score: Score = 0;

        while let Some(span) = longest_overlap_span(&first, &second) {
            let phrase = span.tokens(&first).to_vec();

            let has_content = phrase
                .iter()
                .any(|slot| matches!(slot, Slot::Word(word) if !self.text.is_stopword(word)));
            if has_content {
                let len = span.len as Score;
                score += len * len;
            }

            first = mask(&first, &phrase, Side::First);
            second = mask(&second, &phrase, Side::Second);
        }

        score
    }
}

/// Replace every non-overlapping occurrence of `phrase`, scanning left to
/// right, with a single mask for `side`
fn mask<'a>(slots: &[Slot<'a>], phrase: &[Slot<'a>], side: Side) -> Vec<Slot<'a>> {
    let mut masked = Vec::with_capacity(slots.len());
    let mut i = 0;
    while i < slots.len() {
        if slots[i..].starts_with(phrase) {
            masked.push(Slot::Masked(side));
            i += phrase.len();
        } else {
            masked.push(slots[i].clone());
            i += 1;
        }
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wsd_lexicon::InMemoryLexicon;
    use wsd_text::EnglishTextProcessor;

    fn processor() -> EnglishTextProcessor<InMemoryLexicon> {
        EnglishTextProcessor::new(InMemoryLexicon::new())
    }

    #[test]
    fn scores_each_shared_phrase_quadratically() {
        let text = processor();
        let scorer = GlossScorer::new(&text);
        let score = scorer
            .score(
                "The house is full of rabbits and snakes",
                "My house is overriden by rabbits and snakes",
            )
            .unwrap();
        assert_eq!(score, 13);
    }

    #[test]
    fn disjoint_glosses_score_zero() {
        let text = processor();
        let scorer = GlossScorer::new(&text);
        assert_eq!(scorer.score("ghost player", "baseball superstar").unwrap(), 0);
    }

    #[test]
    fn stopword_only_overlap_is_consumed_without_score() {
        let text = processor();
        let scorer = GlossScorer::new(&text);
        assert_eq!(scorer.score("of the", "of the").unwrap(), 0);
        // "in the" is found first and masked for free, then "bank" adds 1.
        assert_eq!(scorer.score("in the bank", "in the river bank").unwrap(), 1);
        assert_eq!(scorer.score("bank of the river", "of the river bank").unwrap(), 9 + 1);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let text = processor();
        let scorer = GlossScorer::new(&text);
        assert_eq!(
            scorer.score("Medium of exchange; legal tender.", "medium of exchange").unwrap(),
            9
        );
    }

    #[test]
    fn repeated_phrase_is_masked_everywhere() {
        let text = processor();
        let scorer = GlossScorer::new(&text);
        // Both occurrences on each side collapse into one mask.
        assert_eq!(scorer.score("red wine and red wine", "red wine or red wine").unwrap(), 4);
    }

    #[test]
    fn masks_never_match_across_glosses() {
        let text = processor();
        let scorer = GlossScorer::new(&text);
        // The two masked "alpha beta" spans must not pair up with each other.
        assert_eq!(scorer.score("cat alpha beta dog", "dog alpha beta cat").unwrap(), 4 + 1 + 1);
    }

    proptest! {
        #[test]
        fn proptest_empty_gloss_scores_zero(gloss in "[a-z ]{0,40}") {
            let text = processor();
            let scorer = GlossScorer::new(&text);
            prop_assert_eq!(scorer.score("", &gloss).unwrap(), 0);
            prop_assert_eq!(scorer.score(&gloss, "").unwrap(), 0);
        }

        #[test]
        fn proptest_score_is_bounded_by_shorter_gloss(
            first in prop::collection::vec("[a-e]", 0..10),
            second in prop::collection::vec("[a-e]", 0..10),
        ) {
            let text = processor();
            let scorer = GlossScorer::new(&text);
            let bound = first.len().min(second.len()) as Score;
            prop_assert!(scorer.score_tokens(&first, &second) <= bound * bound);
        }
    }
}

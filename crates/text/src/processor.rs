use wsd_lexicon::{LexicalDatabase, Pos};

use crate::error::Result;
use crate::morphy::Morphy;
use crate::{stopwords, tagger, tokenizer, TextProcessor};

/// English text processor backed by a lexical database.
///
/// Tokenizes on Unicode word boundaries, filters with the standard English
/// stopword list, lemmatizes with morphy rules and tags with lexicon-guided
/// Penn tags.
pub struct EnglishTextProcessor<L> {
    morphy: Morphy<L>,
}

impl<L: LexicalDatabase> EnglishTextProcessor<L> {
    pub fn new(lexicon: L) -> Self {
        Self {
            morphy: Morphy::new(lexicon),
        }
    }

    pub fn lexicon(&self) -> &L {
        self.morphy.lexicon()
    }
}

impl<L: LexicalDatabase> TextProcessor for EnglishTextProcessor<L> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(tokenizer::tokenize(text))
    }

    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<(String, String)>> {
        tokens
            .iter()
            .map(|token| {
                let tag = tagger::tag_token(&self.morphy, token)?;
                Ok((token.clone(), tag.to_string()))
            })
            .collect()
    }

    fn lemmatize(&self, token: &str, pos: Pos) -> Result<String> {
        self.morphy.lemmatize(token, pos)
    }

    fn is_stopword(&self, token: &str) -> bool {
        stopwords::is_stopword(token)
    }

    fn is_punctuation(&self, token: &str) -> bool {
        tokenizer::is_punctuation(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wsd_lexicon::{InMemoryLexicon, Sense};

    fn processor() -> EnglishTextProcessor<InMemoryLexicon> {
        EnglishTextProcessor::new(
            InMemoryLexicon::from_senses([
                Sense::new("doctor.n.01", Pos::Noun, "a licensed medical practitioner"),
                Sense::new("hire.v.01", Pos::Verb, "engage for service under a contract"),
                Sense::new("nurse.n.01", Pos::Noun, "one skilled in caring for the sick"),
                Sense::new("hospital.n.01", Pos::Noun, "a health facility"),
                Sense::new("new.a.01", Pos::Adjective, "not of long duration"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn filters_punctuation_and_stopwords() {
        let processor = processor();
        let tokens = processor
            .tokenize("The doctor hired many new nurses, for the hospital.")
            .unwrap();
        let tokens = processor.remove_stopwords(&processor.remove_punctuation(&tokens));
        assert_eq!(
            tokens,
            vec!["doctor", "hired", "many", "new", "nurses", "hospital"]
        );
    }

    #[test]
    fn tags_and_lemmatizes_sentence() {
        let processor = processor();
        let tokens: Vec<String> = ["doctor", "hired", "nurses"]
            .into_iter()
            .map(String::from)
            .collect();

        let lemmas: Vec<String> = processor
            .pos_tag(&tokens)
            .unwrap()
            .into_iter()
            .map(|(token, tag)| {
                let pos = processor.pos_from_tag(&tag).unwrap_or(Pos::Noun);
                processor.lemmatize(&token, pos).unwrap()
            })
            .collect();

        assert_eq!(lemmas, vec!["doctor", "hire", "nurse"]);
    }
}

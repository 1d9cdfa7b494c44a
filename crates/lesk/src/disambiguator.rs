use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wsd_lexicon::{LexicalDatabase, Pos, Sense, SenseId};
use wsd_text::TextProcessor;

use crate::config::LeskConfig;
use crate::error::{LeskError, Result};
use crate::guess_log::{guess_line, FileGuessSink, GuessSink};
use crate::scorer::Score;
use crate::similarity::Relatedness;
use crate::window::context_window;

/// How the returned sense was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Candidates were ranked against the context window
    Scored,
    /// The lemma was missing from its own sentence; first listed sense returned
    Fallback,
}

/// Accumulated context score of one candidate sense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub sense: SenseId,
    pub score: Score,
}

/// Full trace of one disambiguation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disambiguation {
    /// Lemma of the target word
    pub lemma: String,
    /// Resolved part of speech, `None` when the tagger gave no usable tag
    pub pos: Option<Pos>,
    /// Context window, target included
    pub window: Vec<String>,
    pub outcome: Outcome,
    /// Selected sense
    pub sense: Sense,
    /// Score of the selected sense, 0 when it is the default
    pub score: Score,
    /// Every candidate in database order
    pub candidates: Vec<CandidateScore>,
}

/// Adapted Lesk disambiguator.
///
/// Ranks the senses of a target word by their extended gloss overlap with
/// the senses of the words around it.
pub struct Disambiguator<L, P> {
    lexicon: L,
    text: P,
    config: LeskConfig,
    sink: Arc<dyn GuessSink>,
}

impl<L, P> Disambiguator<L, P>
where
    L: LexicalDatabase,
    P: TextProcessor,
{
    /// Create a disambiguator logging guesses to `config.guess_log`
    pub fn new(lexicon: L, text: P, config: LeskConfig) -> Self {
        let sink = Arc::new(FileGuessSink::new(config.guess_log.clone()));
        Self {
            lexicon,
            text,
            config,
            sink,
        }
    }

    /// Replace the guess sink
    pub fn with_sink(mut self, sink: Arc<dyn GuessSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &LeskConfig {
        &self.config
    }

    /// Most plausible sense of `word` in `sentence`, using the configured
    /// window radius
    pub fn disambiguate(&self, word: &str, sentence: &str, pos: Option<Pos>) -> Result<Sense> {
        self.analyze(word, sentence, self.config.window_radius, pos)
            .map(|report| report.sense)
    }

    /// Disambiguate and report how the sense was chosen
    pub fn analyze(
        &self,
        word: &str,
        sentence: &str,
        radius: usize,
        pos: Option<Pos>,
    ) -> Result<Disambiguation> {
        let tokens = self.normalize_sentence(sentence)?;
        let (lemma, pos) = self.resolve_target(word, pos)?;
        let senses = self.lexicon.senses_of(&lemma)?;

        let Some(index) = tokens.iter().position(|token| *token == lemma) else {
            return self.fallback(lemma, pos, &tokens, senses);
        };

        let window = context_window(&tokens, index, radius);
        log::debug!("Window for '{lemma}' ({pos:?}): {window:?}");

        let mut context: Vec<Sense> = Vec::new();
        for token in window.iter().filter(|token| **token != lemma) {
            context.extend(self.lexicon.senses_of(token)?);
        }

        let mut relatedness =
            Relatedness::new(&self.lexicon, &self.text, &self.config.relation_pairs);
        let mut candidates = Vec::new();
        let mut best: Option<(usize, Score)> = None;

        for (slot, candidate) in senses.iter().enumerate() {
            if Some(candidate.part_of_speech()) != pos {
                continue;
            }

            let mut score: Score = 0;
            for other in &context {
                score += relatedness.similarity(candidate, other, pos)?;
            }
            log::debug!("{} scored {score}", candidate.id);

            if score > best.map_or(0, |(_, best_score)| best_score) {
                best = Some((slot, score));
            }
            candidates.push(CandidateScore {
                sense: candidate.id.clone(),
                score,
            });
        }

        let (slot, score) = best.unwrap_or((0, 0));
        let sense = senses
            .into_iter()
            .nth(slot)
            .ok_or_else(|| LeskError::unknown_word(lemma.clone()))?;

        Ok(Disambiguation {
            lemma,
            pos,
            window: window.to_vec(),
            outcome: Outcome::Scored,
            sense,
            score,
            candidates,
        })
    }

    /// Tokenize, drop punctuation and stopwords, then tag and lemmatize
    fn normalize_sentence(&self, sentence: &str) -> Result<Vec<String>> {
        let tokens = self.text.tokenize(sentence)?;
        let tokens: Vec<String> = self
            .text
            .remove_punctuation(&tokens)
            .into_iter()
            .map(|token| token.to_lowercase())
            .collect();
        let tokens = self.text.remove_stopwords(&tokens);

        let mut lemmas = Vec::with_capacity(tokens.len());
        for (token, tag) in self.text.pos_tag(&tokens)? {
            let pos = self.text.pos_from_tag(&tag).unwrap_or(Pos::Noun);
            lemmas.push(self.text.lemmatize(&token, pos)?);
        }
        Ok(lemmas)
    }

    /// Lemma and part of speech of the target word
    fn resolve_target(&self, word: &str, pos: Option<Pos>) -> Result<(String, Option<Pos>)> {
        let word = word.trim().to_lowercase();
        let pos = match pos {
            Some(pos) => Some(pos),
            None => self
                .text
                .pos_tag(std::slice::from_ref(&word))?
                .first()
                .and_then(|(_, tag)| self.text.pos_from_tag(tag)),
        };
        let lemma = self.text.lemmatize(&word, pos.unwrap_or(Pos::Noun))?;
        Ok((lemma, pos))
    }

    fn fallback(
        &self,
        lemma: String,
        pos: Option<Pos>,
        tokens: &[String],
        senses: Vec<Sense>,
    ) -> Result<Disambiguation> {
        log::info!("'{lemma}' not found in its sentence, guessing first sense");
        if let Err(err) = self.sink.append(&guess_line(&lemma, tokens)) {
            log::warn!("Failed to record guess for '{lemma}': {err}");
        }

        let sense = senses
            .into_iter()
            .next()
            .ok_or_else(|| LeskError::unknown_word(lemma.clone()))?;

        Ok(Disambiguation {
            lemma,
            pos,
            window: Vec::new(),
            outcome: Outcome::Fallback,
            sense,
            score: 0,
            candidates: Vec::new(),
        })
    }
}

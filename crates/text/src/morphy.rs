use wsd_lexicon::{LexicalDatabase, Pos};

use crate::error::Result;

/// Suffix detachment rules per part of speech: (suffix, replacement)
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Irregular forms the rules cannot reach
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("lives", "life"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("wives", "wife"),
    ("women", "woman"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("been", "be"),
    ("bought", "buy"),
    ("came", "come"),
    ("did", "do"),
    ("done", "do"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("gone", "go"),
    ("had", "have"),
    ("has", "have"),
    ("held", "hold"),
    ("is", "be"),
    ("kept", "keep"),
    ("made", "make"),
    ("ran", "run"),
    ("said", "say"),
    ("saw", "see"),
    ("seen", "see"),
    ("taken", "take"),
    ("took", "take"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("wrote", "write"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("best", "good"),
    ("better", "good"),
    ("further", "far"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// WordNet-style lemmatizer backed by a lexical database.
///
/// Candidates come from the exception table, the word itself and the
/// suffix rules; only forms the database knows for `pos` survive and the
/// shortest one wins. Unknown words are returned unchanged.
pub struct Morphy<L> {
    lexicon: L,
}

impl<L: LexicalDatabase> Morphy<L> {
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Base forms of `word` known to the database, in discovery order
    pub fn base_forms(&self, word: &str, pos: Pos) -> Result<Vec<String>> {
        let (rules, exceptions) = tables(pos);
        let mut forms: Vec<String> = Vec::new();
        let mut push = |form: String| {
            if !forms.contains(&form) {
                forms.push(form);
            }
        };

        for &(inflected, base) in exceptions {
            if inflected == word && self.lexicon.has_lemma(base, pos)? {
                push(base.to_string());
            }
        }

        if self.lexicon.has_lemma(word, pos)? {
            push(word.to_string());
        }

        for &(suffix, replacement) in rules {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{stem}{replacement}");
            if self.lexicon.has_lemma(&candidate, pos)? {
                push(candidate);
            }
        }

        Ok(forms)
    }

    /// Shortest known base form, or the word itself
    pub fn lemmatize(&self, word: &str, pos: Pos) -> Result<String> {
        let forms = self.base_forms(word, pos)?;
        let lemma = forms
            .into_iter()
            .reduce(|best, form| if form.len() < best.len() { form } else { best })
            .unwrap_or_else(|| word.to_string());
        Ok(lemma)
    }
}

type Table = &'static [(&'static str, &'static str)];

fn tables(pos: Pos) -> (Table, Table) {
    match pos {
        Pos::Noun => (NOUN_RULES, NOUN_EXCEPTIONS),
        Pos::Verb => (VERB_RULES, VERB_EXCEPTIONS),
        Pos::Adjective => (ADJECTIVE_RULES, ADJECTIVE_EXCEPTIONS),
        Pos::Adverb => (&[], &[]),
    }
}

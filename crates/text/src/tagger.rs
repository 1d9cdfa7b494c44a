use wsd_lexicon::{LexicalDatabase, Pos};

use crate::error::Result;
use crate::morphy::Morphy;
use crate::tokenizer::{is_numeric, is_punctuation};

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ical"];

/// Map a Penn Treebank tag onto a part of speech
pub fn pos_from_penn_tag(tag: &str) -> Option<Pos> {
    match tag.chars().next() {
        Some('J') => Some(Pos::Adjective),
        Some('V') => Some(Pos::Verb),
        Some('N') => Some(Pos::Noun),
        Some('R') => Some(Pos::Adverb),
        _ => None,
    }
}

/// Penn tag for one token, guided by the lexical database.
///
/// Known words take the part of speech of their first listed sense, then of
/// the first base form found in noun, verb, adjective, adverb order. Anything
/// else falls back to suffix heuristics.
pub fn tag_token<L: LexicalDatabase>(morphy: &Morphy<L>, token: &str) -> Result<&'static str> {
    if is_numeric(token) {
        return Ok("CD");
    }
    if is_punctuation(token) {
        return Ok(".");
    }

    if let Some(first) = morphy.lexicon().senses_of(token)?.first() {
        return Ok(penn_tag(first.pos, token, token));
    }

    for pos in Pos::ALL {
        if let Some(base) = morphy.base_forms(token, pos)?.first() {
            return Ok(penn_tag(pos, token, base));
        }
    }

    log::debug!("No lexicon entry for '{token}', tagging by suffix");
    Ok(guess_tag(token))
}

fn penn_tag(pos: Pos, token: &str, base: &str) -> &'static str {
    let inflected = token != base;
    match pos {
        Pos::Noun if inflected => "NNS",
        Pos::Noun => "NN",
        Pos::Verb if token.ends_with("ing") => "VBG",
        Pos::Verb if token.ends_with("ed") => "VBD",
        Pos::Verb if inflected && token.ends_with('s') => "VBZ",
        Pos::Verb => "VB",
        Pos::Adjective if inflected && token.ends_with("est") => "JJS",
        Pos::Adjective if inflected && token.ends_with("er") => "JJR",
        Pos::Adjective => "JJ",
        Pos::Adverb => "RB",
    }
}

fn guess_tag(token: &str) -> &'static str {
    if token.ends_with("ly") {
        "RB"
    } else if token.ends_with("ing") {
        "VBG"
    } else if token.ends_with("ed") {
        "VBD"
    } else if ADJECTIVE_SUFFIXES.iter().any(|suffix| token.ends_with(suffix)) {
        "JJ"
    } else if token.ends_with('s') && !token.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Tokens made only of punctuation or symbol characters
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{P}\p{S}]+$").expect("valid punctuation pattern"));

/// Split text on Unicode word boundaries.
/// Whitespace is dropped, punctuation stays as separate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.is_match(token)
}

/// Numbers such as `42`, `3.5` or `1,000`
pub fn is_numeric(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextError>;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Lexical database error: {0}")]
    Lexicon(#[from] wsd_lexicon::LexiconError),
}

use thiserror::Error;

/// Result type for disambiguation operations
pub type Result<T> = std::result::Result<T, LeskError>;

/// Errors surfaced by the disambiguation engine
#[derive(Error, Debug)]
pub enum LeskError {
    /// Lexical database failed to answer
    #[error("Lexical database error: {0}")]
    Lexicon(#[from] wsd_lexicon::LexiconError),

    /// Text processor failed to answer
    #[error("Text processing error: {0}")]
    Text(#[from] wsd_text::TextError),

    /// The lemma has no sense at all, so there is nothing to return
    #[error("No senses found for '{0}'")]
    UnknownWord(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file is not valid TOML
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LeskError {
    /// Create an unknown word error
    pub fn unknown_word(word: impl Into<String>) -> Self {
        Self::UnknownWord(word.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

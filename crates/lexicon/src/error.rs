use thiserror::Error;

/// Result type for lexical database operations
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Errors that can occur while loading or querying a lexical database
#[derive(Error, Debug)]
pub enum LexiconError {
    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Lexicon file is not valid JSON or does not match the expected layout
    #[error("Malformed lexicon: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two senses share the same identifier
    #[error("Duplicate sense id: {0}")]
    DuplicateSense(String),

    /// A relation points to a sense that does not exist
    #[error("Sense {from} points to unknown sense {to}")]
    DanglingRelation { from: String, to: String },

    /// Unrecognized part-of-speech label
    #[error("Unknown part of speech: {0}")]
    UnknownPos(String),

    /// Unrecognized relation label
    #[error("Unknown relation: {0}")]
    UnknownRelation(String),
}

impl LexiconError {
    /// Create an unknown part-of-speech error
    pub fn unknown_pos(label: impl Into<String>) -> Self {
        Self::UnknownPos(label.into())
    }

    /// Create an unknown relation error
    pub fn unknown_relation(label: impl Into<String>) -> Self {
        Self::UnknownRelation(label.into())
    }
}

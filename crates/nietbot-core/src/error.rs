//! Error types for NIETBot.

use thiserror::Error;

/// Every fault NIETBot can report. All of them are startup faults:
/// once the corpus and handbook are loaded, answering a question cannot fail.
#[derive(Debug, Error)]
pub enum NietBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Training corpus error: {0}")]
    Corpus(String),

    #[error("Knowledge record error: {0}")]
    Knowledge(String),
}

pub type Result<T> = std::result::Result<T, NietBotError>;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown difficulty label: {0}")]
    UnknownDifficulty(String),

    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    #[error("unknown draft policy: {0}")]
    UnknownPolicy(String),

    #[error("deadline could not be normalized: {0}")]
    UnparseableDeadline(String),
}

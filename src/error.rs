use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DraftableError {
    #[error("Unrecognized date format: {input:?}")]
    InvalidDateFormat { input: String },

    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, DraftableError>;

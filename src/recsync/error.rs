use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecsyncError {
    #[error("record index {index} out of range for store of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecsyncError>;

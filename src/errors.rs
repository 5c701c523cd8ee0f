use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("failed to encode face vector: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored face vector of record {id} is corrupt: {source}")]
    Decode {
        id: i64,
        #[source]
        source: serde_json::Error,
    },

    #[error("user {0:?} not found")]
    NotFound(String),
}

pub type FaceResult<T> = Result<T, FaceError>;

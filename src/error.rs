use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Board has no columns")]
    NoColumns,

    #[error("Column ID must not be empty")]
    EmptyColumnId,

    #[error("Duplicate column ID: {0}")]
    DuplicateColumnId(String),

    #[error("Duplicate task ID: {0}")]
    DuplicateTaskId(String),

    #[error("Seed task refers to unknown column: {0}")]
    UnknownSeedColumn(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

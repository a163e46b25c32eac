use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrmError {
    #[error("Connect failed: {0}")]
    Connect(String),
    #[error("Begin failed: {0}")]
    Begin(String),
    #[error("Prepare failed: {0}")]
    Prepare(String),
    #[error("Execute failed: {0}")]
    Execute(String),
    #[error("Query failed: {0}")]
    Query(String),
    #[error("Commit failed: {0}")]
    Commit(String),
    #[error("Rollback failed: {0}")]
    Rollback(String),
    #[error("Close failed: {0}")]
    Close(String),
    #[error("Sequence failed for table '{table}': {message}")]
    Sequence { table: String, message: String },
    #[error("Row shape mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("Value type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Join count mismatch: got {joins} join clauses for {types} record types")]
    JoinCount { types: usize, joins: usize },
    #[error("Transaction is no longer active")]
    Inactive,
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid deadline '{0}': expected the format YYYY-MM-DD HH:mm")]
    InvalidFormat(String),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Stored data is not valid JSON")]
    Serialization(#[from] serde_json::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ambiguous task key. Did you mean one of these?")]
    AmbiguousKey(Vec<(String, String)>), // Vec of (key, text)
}

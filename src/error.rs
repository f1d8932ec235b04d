use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyWeightError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Key not found: '{ch}' is not part of the {layout} alphabet")]
    KeyNotFound { layout: String, ch: char },
}

pub type KwResult<T> = Result<T, KeyWeightError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Restart {restart}: ciphertext too short for n-gram scoring ({letters} letters, need {minimum})")]
    InputTooShort {
        restart: usize,
        letters: usize,
        minimum: usize,
    },

    #[error("No candidates: all {restarts} restarts failed")]
    NoCandidates { restarts: usize },
}

pub type CfResult<T> = Result<T, CipherForgeError>;

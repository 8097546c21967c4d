use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to read credentials file {path}: {source}")]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse credentials file {path}: {source}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("Store error: {0}")]
    Backend(String),
}

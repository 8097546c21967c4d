use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::errors::SetupError;

pub const DEFAULT_CREDENTIALS_PATH: &str = "serviceAccountKey.json";
pub const DEFAULT_DATABASE: &str = "tripsplit";

/// Connection details for the managed database, read from a local JSON file.
#[derive(Debug, Deserialize, Clone)]
pub struct Credentials {
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl Credentials {
    pub fn load_default() -> Result<Self, SetupError> {
        Self::load(DEFAULT_CREDENTIALS_PATH)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|source| SetupError::CredentialsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let credentials: Credentials =
            serde_json::from_str(&raw).map_err(|source| SetupError::CredentialsParse {
                path: path.to_path_buf(),
                source,
            })?;

        if credentials.uri.trim().is_empty() {
            return Err(SetupError::InvalidCredentials("uri cannot be empty".to_string()));
        }
        if credentials.database.trim().is_empty() {
            return Err(SetupError::InvalidCredentials("database cannot be empty".to_string()));
        }

        Ok(credentials)
    }
}

use mongodb::Client;

use crate::config::credentials::Credentials;
use crate::errors::SetupError;

pub async fn connect(credentials: &Credentials) -> Result<Client, SetupError> {
    let client = Client::with_uri_str(&credentials.uri).await?;
    Ok(client)
}

use anyhow::{Error, Result, anyhow};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct AccessSecretVersionResponse {
    payload: SecretPayload,
}

#[derive(Debug, Deserialize)]
struct SecretPayload {
    data: String,
}

/// Reads the latest version of a Secret Manager secret. Startup-only; the
/// per-request path never touches the secret store.
pub async fn access_secret(project_id: &str, secret_id: &str) -> Result<String, Error> {
    let provider = gcp_auth::provider().await?;
    let scopes = &["https://www.googleapis.com/auth/cloud-platform"];

    let token = provider.token(scopes).await?;

    let url = format!(
        "https://secretmanager.googleapis.com/v1/projects/{project_id}/secrets/{secret_id}/versions/latest:access"
    );

    let response = Client::new()
        .get(&url)
        .bearer_auth(token.as_str())
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Secret Manager returned status {}",
            response.status()
        ));
    }

    let secret: AccessSecretVersionResponse = response.json().await?;

    let decoded = STANDARD
        .decode(secret.payload.data.as_bytes())
        .map_err(|_| anyhow!("Secret payload is not valid base64"))?;

    let value =
        String::from_utf8(decoded).map_err(|_| anyhow!("Secret payload is not valid UTF-8"))?;

    info!(secret_id, "Provider API key loaded from Secret Manager");

    Ok(value.trim().to_string())
}

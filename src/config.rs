use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::clients::secrets;

/// Production provider endpoint. Overridable through the environment for
/// sandbox keys and tests.
pub const NOTIFY_BASE_URL: &str = "https://api.notifications.service.gov.uk/v2";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub rabbitmq_url: String,
    pub fulfilment_queue_name: String,
    pub prefetch_count: u16,

    pub server_port: u16,

    #[serde(default)]
    pub notify_api_key: Option<String>,

    #[serde(default = "default_notify_base_url")]
    pub notify_base_url: String,

    #[serde(default = "default_notify_request_timeout_seconds")]
    pub notify_request_timeout_seconds: u64,

    #[serde(default)]
    pub gcp_project_id: Option<String>,

    #[serde(default = "default_notify_api_key_secret_id")]
    pub notify_api_key_secret_id: String,
}

fn default_notify_base_url() -> String {
    NOTIFY_BASE_URL.to_string()
}

fn default_notify_request_timeout_seconds() -> u64 {
    10
}

fn default_notify_api_key_secret_id() -> String {
    "notify-api-key".to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }

    /// Resolves the raw provider key: the environment wins, the secret
    /// store is the fallback. Called once during startup; no key from
    /// either source is fatal.
    pub async fn resolve_notify_api_key(&self) -> Result<String, Error> {
        if let Some(key) = &self.notify_api_key {
            return Ok(key.clone());
        }

        let project_id = self.gcp_project_id.as_deref().ok_or_else(|| {
            anyhow!("NOTIFY_API_KEY is unset and no GCP project is configured for secret lookup")
        })?;

        secrets::access_secret(project_id, &self.notify_api_key_secret_id).await
    }
}

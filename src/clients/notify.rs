use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use axum::http::StatusCode;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::{
    auth::NotifyApiKey,
    config::Config,
    models::{
        email::{NotifyErrorResponse, SendEmailRequest, SendEmailResponse},
        message::{LogContext, NotifyRequestArgs},
        outcome::Outcome,
    },
};

/// Client for the provider's email-send endpoint. One instance lives for
/// the whole process; reqwest's internal pooling makes it safe to share
/// across tasks without extra locking.
pub struct NotifyClient {
    http_client: Client,
    base_url: String,
    api_key: NotifyApiKey,
}

impl NotifyClient {
    pub fn new(config: &Config, api_key: NotifyApiKey) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.notify_request_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.notify_base_url, "Notify client initialized");

        Ok(Self {
            http_client,
            base_url: config.notify_base_url.clone(),
            api_key,
        })
    }

    /// Sends one email request and classifies the provider's answer. Every
    /// branch resolves to an Outcome; nothing propagates as a fault.
    pub async fn send_email(&self, args: &NotifyRequestArgs, log_context: &LogContext) -> Outcome {
        let url = format!("{}/notifications/email", self.base_url);
        let request = SendEmailRequest::from_args(args);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.bearer_token())
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(error) => {
                warn!(
                    tx_id = ?log_context.tx_id,
                    questionnaire_id = ?log_context.questionnaire_id,
                    error = %error,
                    "No response received from notify"
                );
                return Outcome::ProviderError {
                    message: "connection error".to_string(),
                    status: StatusCode::GATEWAY_TIMEOUT,
                    detail: None,
                };
            }
        };

        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<NotifyErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.first_error());

            error!(
                tx_id = ?log_context.tx_id,
                questionnaire_id = ?log_context.questionnaire_id,
                status = status.as_u16(),
                detail = ?detail,
                "Notify request failed"
            );

            return Outcome::ProviderError {
                message: "notify request failed".to_string(),
                status,
                detail,
            };
        }

        if status == StatusCode::NO_CONTENT {
            info!(
                tx_id = ?log_context.tx_id,
                questionnaire_id = ?log_context.questionnaire_id,
                "Notify returned no content"
            );
            return Outcome::Success {
                message: "no content".to_string(),
                status,
            };
        }

        match response.json::<SendEmailResponse>().await {
            Ok(body) => {
                // the rendered `content` field stays out of the logs
                info!(
                    tx_id = ?log_context.tx_id,
                    questionnaire_id = ?log_context.questionnaire_id,
                    status = status.as_u16(),
                    notification_id = ?body.id,
                    reference = ?body.reference,
                    uri = ?body.uri,
                    template = ?body.template,
                    "Notify request successful"
                );
                Outcome::Success {
                    message: "notify request successful".to_string(),
                    status,
                }
            }
            Err(error) => {
                error!(
                    tx_id = ?log_context.tx_id,
                    questionnaire_id = ?log_context.questionnaire_id,
                    error = %error,
                    "Notify response failed decoding"
                );
                Outcome::ProviderError {
                    message: "notify JSON response object failed decoding".to_string(),
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    detail: None,
                }
            }
        }
    }
}

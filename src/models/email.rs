use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::message::NotifyRequestArgs;

/// Body of `POST {base_url}/notifications/email`.
#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest {
    pub template_id: &'static str,
    pub personalisation: Personalisation,
    pub email_address: String,
}

/// Key/value substitutions applied into the template at send time. The
/// fulfilment flow only personalises the postal address.
#[derive(Debug, Clone, Serialize)]
pub struct Personalisation {
    pub address: String,
}

impl SendEmailRequest {
    pub fn from_args(args: &NotifyRequestArgs) -> Self {
        Self {
            template_id: args.template_id,
            personalisation: Personalisation {
                address: args.display_address.clone(),
            },
            email_address: args.email_address.clone(),
        }
    }
}

/// Successful send acknowledgment. `content` holds the rendered message
/// and is deserialized but never logged.
#[derive(Debug, Clone, Deserialize)]
pub struct SendEmailResponse {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub template: Option<JsonValue>,

    #[serde(default)]
    pub content: Option<JsonValue>,
}

/// Error body. `errors` stays loose because the provider is not strict
/// about its shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotifyErrorResponse {
    #[serde(default)]
    pub status_code: Option<u16>,

    #[serde(default)]
    pub errors: JsonValue,
}

impl NotifyErrorResponse {
    /// First entry of `errors`, or the raw value when it is not an array.
    pub fn first_error(&self) -> Option<String> {
        if self.errors.is_null() {
            return None;
        }

        let detail = self.errors.get(0).unwrap_or(&self.errors);

        Some(match detail {
            JsonValue::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

use serde::Deserialize;

/// Inbound event body. Only `payload.fulfilmentRequest` carries meaning;
/// anything else in the envelope is ignored.
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub payload: Option<Payload>,
}

#[derive(Debug, Deserialize)]
pub struct Payload {
    #[serde(rename = "fulfilmentRequest", default)]
    pub fulfilment_request: Option<FulfilmentRequest>,
}

/// The domain event naming who receives a notification and at what address.
///
/// Leaf fields stay optional so the validator owns presence checking and can
/// report every missing field by name in one pass.
#[derive(Debug, Clone, Deserialize)]
pub struct FulfilmentRequest {
    #[serde(default)]
    pub form_type: Option<String>,

    #[serde(default)]
    pub region_code: Option<String>,

    #[serde(default)]
    pub language_code: Option<String>,

    #[serde(default)]
    pub email_address: Option<String>,

    #[serde(default)]
    pub display_address: Option<String>,

    #[serde(default)]
    pub tx_id: Option<String>,

    #[serde(default)]
    pub questionnaire_id: Option<String>,
}

/// Correlation fields attached to every log entry for one event. Both
/// fields are carried even when absent from the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogContext {
    pub tx_id: Option<String>,
    pub questionnaire_id: Option<String>,
}

impl LogContext {
    pub fn from_request(request: &FulfilmentRequest) -> Self {
        Self {
            tx_id: request.tx_id.clone(),
            questionnaire_id: request.questionnaire_id.clone(),
        }
    }
}

/// Validated, ready-to-send payload arguments. Immutable once resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyRequestArgs {
    pub template_id: &'static str,
    pub email_address: String,
    pub display_address: String,
}

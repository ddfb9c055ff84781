use axum::http::{Method, StatusCode};
use tracing::warn;

use crate::models::{
    message::{FulfilmentRequest, LogContext, NotifyRequestArgs, RawEvent},
    template,
};

/// A locally recovered rejection: the (message, status) pair is surfaced to
/// the caller unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
    pub status: StatusCode,
}

impl ValidationError {
    fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

/// Validates an inbound event and resolves its template.
///
/// Returns the ready-to-send arguments plus the correlation context, or the
/// rejection to surface. The field array below fixes the order missing
/// fields are reported in.
pub fn validate_request(
    method: &Method,
    body: &[u8],
) -> Result<(NotifyRequestArgs, LogContext), ValidationError> {
    if method != Method::POST {
        warn!(method = %method, "Rejected request with disallowed method");
        return Err(ValidationError::new(
            "method not allowed",
            StatusCode::METHOD_NOT_ALLOWED,
        ));
    }

    let Some(request) = parse_fulfilment_request(body) else {
        warn!("Rejected request without fulfilment request data");
        return Err(ValidationError::new(
            "missing notification request data",
            StatusCode::UNPROCESSABLE_ENTITY,
        ));
    };

    let log_context = LogContext::from_request(&request);

    let form_type = field_value(&request.form_type);
    let region_code = field_value(&request.region_code);
    let language_code = field_value(&request.language_code);
    let email_address = field_value(&request.email_address);
    let display_address = field_value(&request.display_address);

    let fields = [
        ("form_type", form_type),
        ("region_code", region_code),
        ("language_code", language_code),
        ("email_address", email_address),
        ("display_address", display_address),
    ];

    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        let missing_fields = missing.join(", ");
        warn!(
            tx_id = ?log_context.tx_id,
            questionnaire_id = ?log_context.questionnaire_id,
            missing = %missing_fields,
            "Rejected incomplete fulfilment request"
        );
        return Err(ValidationError::new(
            format!("missing {missing_fields} identifier(s)"),
            StatusCode::UNPROCESSABLE_ENTITY,
        ));
    }

    let Some(template_id) = template::template_id(form_type, region_code, language_code) else {
        warn!(
            tx_id = ?log_context.tx_id,
            questionnaire_id = ?log_context.questionnaire_id,
            form_type,
            region_code,
            language_code,
            "No template mapped for fulfilment request"
        );
        return Err(ValidationError::new(
            "no template id selected",
            StatusCode::UNPROCESSABLE_ENTITY,
        ));
    };

    let args = NotifyRequestArgs {
        template_id,
        email_address: email_address.to_owned(),
        display_address: display_address.to_owned(),
    };

    Ok((args, log_context))
}

fn field_value(field: &Option<String>) -> &str {
    field.as_deref().map(str::trim).unwrap_or_default()
}

fn parse_fulfilment_request(body: &[u8]) -> Option<FulfilmentRequest> {
    if body.is_empty() {
        return None;
    }

    let event: RawEvent = serde_json::from_slice(body).ok()?;
    event.payload?.fulfilment_request
}

use axum::http::Method;
use fulfilment_notify::models::validation::validate_request;
use serde_json::{Value, json};

/// Test: non-POST methods are rejected regardless of body content
#[test]
fn test_get_not_allowed() {
    let body = event_body(&fulfilment_request_event());

    let error = validate_request(&Method::GET, &body).unwrap_err();

    assert_eq!(error.message, "method not allowed");
    assert_eq!(error.status.as_u16(), 405);
}

/// Test: an empty body is rejected as missing request data
#[test]
fn test_empty_body_returns_422() {
    let error = validate_request(&Method::POST, b"").unwrap_err();

    assert_eq!(error.message, "missing notification request data");
    assert_eq!(error.status.as_u16(), 422);
}

/// Test: an empty JSON object is rejected as missing request data
#[test]
fn test_missing_data_returns_422() {
    let error = validate_request(&Method::POST, b"{}").unwrap_err();

    assert_eq!(error.message, "missing notification request data");
    assert_eq!(error.status.as_u16(), 422);
}

/// Test: an unparseable body is rejected as missing request data
#[test]
fn test_unparseable_body_returns_422() {
    let error = validate_request(&Method::POST, b"{ invalid json }").unwrap_err();

    assert_eq!(error.message, "missing notification request data");
    assert_eq!(error.status.as_u16(), 422);
}

/// Test: a payload without a fulfilment request is rejected the same way
#[test]
fn test_missing_fulfilment_request_returns_422() {
    let body = event_body(&json!({"payload": {}}));

    let error = validate_request(&Method::POST, &body).unwrap_err();

    assert_eq!(error.message, "missing notification request data");
    assert_eq!(error.status.as_u16(), 422);
}

/// Test: each required field is reported by name when absent
#[test]
fn test_missing_single_identifiers() {
    for field in [
        "form_type",
        "region_code",
        "language_code",
        "email_address",
        "display_address",
    ] {
        let mut event = fulfilment_request_event();
        remove_fields(&mut event, &[field]);

        let error = validate_request(&Method::POST, &event_body(&event)).unwrap_err();

        assert_eq!(error.message, format!("missing {field} identifier(s)"));
        assert_eq!(error.status.as_u16(), 422);
    }
}

/// Test: multiple missing fields are all reported, comma-joined
#[test]
fn test_multiple_missing_identifiers() {
    let mut event = fulfilment_request_event();
    remove_fields(&mut event, &["display_address", "email_address"]);

    let error = validate_request(&Method::POST, &event_body(&event)).unwrap_err();

    assert_eq!(
        error.message,
        "missing email_address, display_address identifier(s)"
    );
    assert_eq!(error.status.as_u16(), 422);
}

/// Test: missing fields are listed in declared order, not deletion order
#[test]
fn test_missing_identifiers_keep_declared_order() {
    let mut event = fulfilment_request_event();
    remove_fields(&mut event, &["display_address", "form_type"]);

    let error = validate_request(&Method::POST, &event_body(&event)).unwrap_err();

    assert_eq!(
        error.message,
        "missing form_type, display_address identifier(s)"
    );
}

/// Test: an empty-string field counts as missing
#[test]
fn test_empty_field_counts_as_missing() {
    let mut event = fulfilment_request_event();
    event["payload"]["fulfilmentRequest"]["form_type"] = json!("");

    let error = validate_request(&Method::POST, &event_body(&event)).unwrap_err();

    assert_eq!(error.message, "missing form_type identifier(s)");
    assert_eq!(error.status.as_u16(), 422);
}

/// Test: an unmapped template combination is rejected, never defaulted
#[test]
fn test_no_valid_template_selected() {
    let mut event = fulfilment_request_event();
    event["payload"]["fulfilmentRequest"]["form_type"] = json!("not-valid");

    let error = validate_request(&Method::POST, &event_body(&event)).unwrap_err();

    assert_eq!(error.message, "no template id selected");
    assert_eq!(error.status.as_u16(), 422);
}

/// Test: a valid event resolves its template and carries the addresses
#[test]
fn test_valid_request_resolves_template() {
    let body = event_body(&fulfilment_request_event());

    let (args, log_context) = validate_request(&Method::POST, &body).unwrap();

    assert_eq!(args.template_id, "0c5a4f95-bfa4-4364-9394-8499b4d777d5");
    assert_eq!(
        args.email_address,
        "simulate-delivered@notifications.service.gov.uk"
    );
    assert_eq!(args.display_address, "test address");
    assert_eq!(log_context.tx_id, None);
    assert_eq!(log_context.questionnaire_id, None);
}

/// Test: correlation identifiers are extracted when present
#[test]
fn test_log_context_carries_correlation_ids() {
    let mut event = fulfilment_request_event();
    event["payload"]["fulfilmentRequest"]["tx_id"] = json!("tx-123");
    event["payload"]["fulfilmentRequest"]["questionnaire_id"] = json!("q-456");

    let (_, log_context) = validate_request(&Method::POST, &event_body(&event)).unwrap();

    assert_eq!(log_context.tx_id.as_deref(), Some("tx-123"));
    assert_eq!(log_context.questionnaire_id.as_deref(), Some("q-456"));
}

fn fulfilment_request_event() -> Value {
    json!({
        "payload": {
            "fulfilmentRequest": {
                "email_address": "simulate-delivered@notifications.service.gov.uk",
                "display_address": "test address",
                "form_type": "H",
                "language_code": "en",
                "region_code": "GB-ENG",
            },
        },
    })
}

fn event_body(event: &Value) -> Vec<u8> {
    serde_json::to_vec(event).unwrap()
}

fn remove_fields(event: &mut Value, fields: &[&str]) {
    let request = event["payload"]["fulfilmentRequest"]
        .as_object_mut()
        .unwrap();

    for field in fields {
        request.remove(*field);
    }
}

use axum::http::Method;

use crate::{
    clients::notify::NotifyClient,
    models::{outcome::Outcome, validation::validate_request},
};

/// The single forwarding operation both entry adapters wrap: validate the
/// event, resolve its template, then send and classify. Stateless across
/// invocations apart from the shared client.
pub async fn process_fulfilment(client: &NotifyClient, method: &Method, body: &[u8]) -> Outcome {
    let (args, log_context) = match validate_request(method, body) {
        Ok(validated) => validated,
        Err(error) => return error.into(),
    };

    client.send_email(&args, &log_context).await
}

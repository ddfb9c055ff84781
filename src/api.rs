use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{clients::notify::NotifyClient, config::Config, utils::process_fulfilment};

pub struct AppState {
    notify_client: Arc<NotifyClient>,
}

/// Single-invocation entry point: one request runs one synchronous
/// validate, send, interpret cycle and returns the outcome as the response.
pub async fn run_api_server(
    config: Config,
    notify_client: Arc<NotifyClient>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState { notify_client });

    let app = Router::new()
        .route("/", any(send_email))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Fulfilment notify server started");

    axum::serve(listener, app).await?;

    Ok(())
}

// The route accepts any method so the validator owns the 405 rule.
async fn send_email(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> impl IntoResponse {
    let outcome = process_fulfilment(&state.notify_client, &method, &body).await;

    (outcome.status(), outcome.message().to_string())
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

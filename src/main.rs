use std::sync::Arc;

use anyhow::{Error, Result};
use fulfilment_notify::{
    api::run_api_server, auth::NotifyApiKey, clients::notify::NotifyClient, config::Config,
    consumer::FulfilmentConsumer,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::load()?;

    // A malformed key aborts here, before either adapter starts serving.
    let raw_key = config.resolve_notify_api_key().await?;
    let api_key = NotifyApiKey::parse(&raw_key)?;

    let notify_client = Arc::new(NotifyClient::new(&config, api_key)?);

    let consumer = FulfilmentConsumer::connect(&config).await?;

    info!("Running fulfilment notify bridge");

    let api_client = Arc::clone(&notify_client);
    let api_config = config.clone();
    let server = tokio::spawn(async move {
        if let Err(error) = run_api_server(api_config, api_client).await {
            error!(error = %error, "API server exited");
        }
    });

    consumer.run(notify_client).await?;

    server.abort();

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,fulfilment_notify=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
        .init();
}

use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use axum::http::Method;
use futures_util::StreamExt;
use lapin::{
    Channel, Connection, ConnectionProperties, Consumer,
    options::{BasicAckOptions, BasicConsumeOptions, BasicQosOptions, QueueDeclareOptions},
    types::FieldTable,
};
use tracing::{debug, error, info, warn};

use crate::{
    clients::notify::NotifyClient, config::Config, models::outcome::Outcome,
    utils::process_fulfilment,
};

/// Pull consumer for the fulfilment-request queue.
pub struct FulfilmentConsumer {
    channel: Channel,
    queue_name: String,
}

impl FulfilmentConsumer {
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        info!("Connecting to RabbitMQ...");

        let connection = Connection::connect(&config.rabbitmq_url, ConnectionProperties::default())
            .await
            .map_err(|_| anyhow!("Failed to connect to RabbitMQ"))?;

        let channel = connection
            .create_channel()
            .await
            .map_err(|_| anyhow!("RabbitMQ channel creation failed"))?;

        channel
            .basic_qos(config.prefetch_count, BasicQosOptions::default())
            .await
            .map_err(|_| anyhow!("Failed to set up QoS"))?;

        channel
            .queue_declare(
                &config.fulfilment_queue_name,
                QueueDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|_| anyhow!("Failed to declare fulfilment queue"))?;

        info!(queue = %config.fulfilment_queue_name, "Fulfilment queue declared");

        Ok(Self {
            channel,
            queue_name: config.fulfilment_queue_name.clone(),
        })
    }

    /// Drains the queue until the channel closes. Each delivery is handed
    /// off to its own task and acknowledged immediately after the handoff,
    /// not after send completion: delivery is at-most-once, and a send that
    /// later fails is not redelivered.
    pub async fn run(&self, notify_client: Arc<NotifyClient>) -> Result<(), Error> {
        let mut consumer = self.create_consumer().await?;

        info!("Listening for fulfilment requests...");

        while let Some(delivery) = consumer.next().await {
            let delivery = match delivery {
                Ok(delivery) => delivery,
                Err(error) => {
                    warn!(error = %error, "Failed to receive delivery");
                    continue;
                }
            };

            debug!(delivery_tag = delivery.delivery_tag, "Processing message");

            let client = Arc::clone(&notify_client);
            let payload = delivery.data.clone();

            tokio::spawn(async move {
                match process_fulfilment(&client, &Method::POST, &payload).await {
                    Outcome::Success { message, status } => {
                        info!(
                            outcome = %message,
                            status = status.as_u16(),
                            "Fulfilment request forwarded"
                        );
                    }
                    outcome => {
                        error!(
                            outcome = %outcome.message(),
                            status = outcome.status().as_u16(),
                            "Fulfilment request not forwarded"
                        );
                    }
                }
            });

            debug!(delivery_tag = delivery.delivery_tag, "Acknowledging message");
            self.acknowledge(delivery.delivery_tag).await?;
        }

        Ok(())
    }

    async fn create_consumer(&self) -> Result<Consumer, Error> {
        let consumer = self
            .channel
            .basic_consume(
                &self.queue_name,
                "fulfilment_notify",
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await
            .map_err(|_| anyhow!("Failed to create consumer"))?;

        Ok(consumer)
    }

    async fn acknowledge(&self, delivery_tag: u64) -> Result<(), Error> {
        self.channel
            .basic_ack(delivery_tag, BasicAckOptions::default())
            .await
            .map_err(|_| anyhow!("Failed to acknowledge message"))?;

        Ok(())
    }
}

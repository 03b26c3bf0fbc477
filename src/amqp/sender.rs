use async_trait::async_trait;
use lapin::{options::BasicPublishOptions, BasicProperties, Channel};
use log::{debug, error};

use crate::amqp::batch::LapinBatch;
use crate::amqp::{CLOSE_REPLY_CODE, CLOSE_REPLY_TEXT};
use crate::errors::amqp_error::AmqpError;
use crate::models::destination::Destination;
use crate::transport::{MessageBatch, TransportSender};

const PERSISTENT_DELIVERY_MODE: u8 = 2;

pub struct LapinSender {
    channel: Channel,
    destination: Destination,
    max_message_size: usize,
    closed: bool,
}

impl LapinSender {
    pub fn new(channel: Channel, destination: Destination, max_message_size: usize) -> Self {
        Self {
            channel,
            destination,
            max_message_size,
            closed: false,
        }
    }
}

#[async_trait]
impl TransportSender for LapinSender {
    type Batch = LapinBatch;

    async fn create_batch(&self) -> Result<LapinBatch, AmqpError> {
        Ok(LapinBatch::new(self.max_message_size))
    }

    async fn send(&self, batch: LapinBatch) -> Result<(), AmqpError> {
        debug!(target: "app", "send - publishing {} message(s), {} bytes, to queue {}", batch.len(), batch.size_in_bytes(), &self.destination);
        for message in batch.into_messages() {
            let properties = BasicProperties::default()
                .with_content_type(message.content_type().into())
                .with_delivery_mode(PERSISTENT_DELIVERY_MODE);
            // default exchange, routed by queue name
            let confirm = self
                .channel
                .basic_publish(
                    "",
                    self.destination.name(),
                    BasicPublishOptions::default(),
                    message.body().as_bytes(),
                    properties,
                )
                .await
                .map_err(AmqpError::Publish)?;
            let confirmation = confirm.await.map_err(AmqpError::Publish)?;
            if confirmation.is_nack() {
                error!(target: "app", "send - broker rejected the message for queue {}", &self.destination);
                return Err(AmqpError::Nack(self.destination.name().to_string()));
            }
        }
        Ok(())
    }

    async fn close(&mut self) -> Result<(), AmqpError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if !self.channel.status().connected() {
            debug!(target: "app", "close - AMQP channel already closed");
            return Ok(());
        }
        self.channel
            .close(CLOSE_REPLY_CODE, CLOSE_REPLY_TEXT)
            .await
            .map_err(AmqpError::Close)
    }
}

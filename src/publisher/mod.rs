//! Publisher facade: one payload, one connection, one single-message batch.

use std::fmt;

use log::{debug, error, info};
use serde::Serialize;

use crate::errors::publish_error::PublishError;
use crate::models::destination::Destination;
use crate::models::message::OutboundMessage;
use crate::transport::{MessageBatch, Transport, TransportConnection, TransportSender};

pub mod publisher_config;

pub use publisher_config::PublisherConfig;

type SenderOf<Tr> = <<Tr as Transport>::Connection as TransportConnection>::Sender;

/// Lifecycle of a single publish call. `Closed` is reached from both the
/// success and the failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishState {
    Connecting,
    Sending,
    Closed,
}

impl fmt::Display for PublishState {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PublishState::Connecting => fmt.write_str("connecting"),
            PublishState::Sending => fmt.write_str("sending"),
            PublishState::Closed => fmt.write_str("closed"),
        }
    }
}

/// Serializes payloads and sends each of them to the configured queue
/// over a connection that lives only for the duration of the call.
///
/// Calls share nothing but the configuration, so a `Publisher` can be
/// wrapped in an `Arc` and used by many tasks at once.
pub struct Publisher<Tr: Transport> {
    transport: Tr,
    config: PublisherConfig,
}

impl<Tr: Transport> Publisher<Tr> {
    pub fn new(transport: Tr, config: PublisherConfig) -> Self {
        Self { transport, config }
    }

    /// Serializes `payload` to JSON and sends it as a single message.
    ///
    /// Nothing is opened if serialization fails. Otherwise teardown runs
    /// before returning, whatever the outcome, including a failed connect.
    pub async fn publish<T>(&self, payload: &T) -> Result<(), PublishError>
    where
        T: Serialize + ?Sized,
    {
        let message = OutboundMessage::from_payload(payload).map_err(|err| {
            error!(target: "app", "publish - cannot serialize payload. Err = {:?}", err);
            PublishError::Serialization(err)
        })?;
        self.publish_message(message).await
    }

    /// Sends an already serialized JSON body.
    pub async fn publish_json(&self, body: String) -> Result<(), PublishError> {
        self.publish_message(OutboundMessage::new(body)).await
    }

    async fn publish_message(&self, message: OutboundMessage) -> Result<(), PublishError> {
        let destination = &self.config.destination;
        debug!(target: "app", "publish_message - state = {}, queue = {}", PublishState::Connecting, destination);
        let mut sender: Option<SenderOf<Tr>> = None;
        let (connection, result) = match self.transport.connect(&self.config.connect_options()).await {
            Ok(mut connection) => {
                let result = Self::send_single(&mut connection, &mut sender, destination, message).await;
                (Some(connection), result)
            }
            Err(err) => (None, Err(PublishError::Transport(err))),
        };
        if let Err(err) = &result {
            error!(target: "app", "publish_message - cannot publish message to queue {}. Err = {:?}", destination, err);
        }

        Self::teardown(sender, connection, destination).await;
        debug!(target: "app", "publish_message - state = {}, queue = {}", PublishState::Closed, destination);
        result
    }

    // the sender is stored in `sender_slot` as soon as it exists, so that
    // teardown can close it whichever step fails afterwards
    async fn send_single(
        connection: &mut Tr::Connection,
        sender_slot: &mut Option<SenderOf<Tr>>,
        destination: &Destination,
        message: OutboundMessage,
    ) -> Result<(), PublishError> {
        let sender = sender_slot.insert(connection.create_sender(destination).await?);
        debug!(target: "app", "send_single - state = {}, queue = {}", PublishState::Sending, destination);

        let mut batch = sender.create_batch().await?;
        let size = message.size();
        let body = message.body().to_string();
        if !batch.try_add(message) {
            return Err(PublishError::MessageTooLarge {
                size,
                max: batch.max_size_in_bytes(),
            });
        }

        sender.send(batch).await?;
        info!(target: "app", "send_single - message sent to queue {} | {}", destination, body);
        Ok(())
    }

    // failures here are logged only, they never replace the publish outcome
    async fn teardown(
        sender: Option<SenderOf<Tr>>,
        connection: Option<Tr::Connection>,
        destination: &Destination,
    ) {
        if let Some(mut sender) = sender {
            if let Err(err) = sender.close().await {
                error!(target: "app", "teardown - cannot close sender. Err = {:?}", err);
            }
            drop(sender);
        }
        if let Some(mut connection) = connection {
            if let Err(err) = connection.close().await {
                error!(target: "app", "teardown - cannot close connection. Err = {:?}", err);
            }
            drop(connection);
        }
        info!(target: "app", "teardown - connection to queue {} closed", destination);
    }
}

//! Collaborator contract of the publisher: connect, create a sender for a
//! destination, fill a batch and send it, then close everything.
//!
//! Dropping a sender or a connection disposes it, so the lifecycle of one
//! publish is `close sender` -> `drop sender` -> `close connection` -> `drop connection`.

use async_trait::async_trait;

use crate::errors::amqp_error::AmqpError;
use crate::models::destination::Destination;
use crate::models::message::OutboundMessage;

pub mod options;

pub use options::ConnectOptions;

#[async_trait]
pub trait Transport: Send + Sync {
    type Connection: TransportConnection;

    async fn connect(&self, options: &ConnectOptions) -> Result<Self::Connection, AmqpError>;
}

#[async_trait]
pub trait TransportConnection: Send {
    type Sender: TransportSender;

    async fn create_sender(&mut self, destination: &Destination) -> Result<Self::Sender, AmqpError>;

    /// Closing twice must be a no-op.
    async fn close(&mut self) -> Result<(), AmqpError>;
}

#[async_trait]
pub trait TransportSender: Send {
    type Batch: MessageBatch;

    async fn create_batch(&self) -> Result<Self::Batch, AmqpError>;

    async fn send(&self, batch: Self::Batch) -> Result<(), AmqpError>;

    /// Closing twice must be a no-op.
    async fn close(&mut self) -> Result<(), AmqpError>;
}

pub trait MessageBatch: Send {
    /// Adds the message if it fits, returns false otherwise.
    fn try_add(&mut self, message: OutboundMessage) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn size_in_bytes(&self) -> usize;

    fn max_size_in_bytes(&self) -> usize;
}


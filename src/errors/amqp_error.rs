use thiserror::Error;

use crate::errors::connection_string_error::ConnectionStringError;

// custom error, based on 'thiserror' library
#[derive(Error, Debug)]
pub enum AmqpError {
    #[error("amqp_client connection error: {0}")]
    Connect(lapin::Error),
    #[error("amqp_client channel error: {0}")]
    Channel(lapin::Error),
    #[error("amqp_client cannot declare queue {queue}: {source}")]
    QueueDeclare { queue: String, source: lapin::Error },
    #[error("amqp_client publish error: {0}")]
    Publish(lapin::Error),
    #[error("amqp_client message to queue {0} was rejected by the broker")]
    Nack(String),
    #[error("amqp_client close error: {0}")]
    Close(lapin::Error),
    #[error("amqp_client invalid connection string: {0}")]
    InvalidConnectionString(#[from] ConnectionStringError),
}

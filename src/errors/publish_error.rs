use thiserror::Error;

use crate::errors::amqp_error::AmqpError;

// custom error, based on 'thiserror' library
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("cannot serialize payload to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("message of {size} bytes is too large for the batch (max {max} bytes)")]
    MessageTooLarge { size: usize, max: usize },
    #[error("transport error: {0}")]
    Transport(#[from] AmqpError),
}

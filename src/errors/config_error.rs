use thiserror::Error;

use crate::errors::connection_string_error::ConnectionStringError;

// custom error, based on 'thiserror' library
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read environment variables: {0}")]
    Env(#[from] envy::Error),
    #[error("queue name must not be empty")]
    EmptyQueueName,
    #[error("max message size must be greater than zero")]
    ZeroMaxMessageSize,
    #[error("unknown transport type '{0}', expected 'amqp' or 'amqp_websockets'")]
    InvalidTransportType(String),
    #[error("invalid connection string: {0}")]
    ConnectionString(#[from] ConnectionStringError),
    #[error("cannot initialize logger: {0}")]
    Logger(String),
}

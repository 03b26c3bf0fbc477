use thiserror::Error;

// custom error, based on 'thiserror' library
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConnectionStringError {
    #[error("connection string is empty")]
    Empty,
    #[error("connection string segment '{0}' is not a key=value pair")]
    MalformedSegment(String),
    #[error("connection string has no Endpoint")]
    MissingEndpoint,
    #[error("connection string Endpoint '{0}' has no host")]
    InvalidEndpoint(String),
    #[error("connection string has SharedAccessKeyName without SharedAccessKey")]
    MissingSharedAccessKey,
    #[error("cannot parse AMQP URI: {0}")]
    InvalidUri(String),
}

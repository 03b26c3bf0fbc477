use async_trait::async_trait;
use lapin::{
    options::{ConfirmSelectOptions, QueueDeclareOptions},
    types::FieldTable,
    uri::AMQPUri,
    Connection, ConnectionProperties,
};
use log::{debug, error, info, warn};

use crate::errors::amqp_error::AmqpError;
use crate::errors::connection_string_error::ConnectionStringError;
use crate::models::destination::Destination;
use crate::models::transport_type::TransportType;
use crate::transport::{ConnectOptions, Transport, TransportConnection};

pub mod batch;
pub mod sender;

pub use batch::LapinBatch;
pub use sender::LapinSender;

const CLOSE_REPLY_CODE: u16 = 200;
const CLOSE_REPLY_TEXT: &str = "OK";

/// Transport backed by `lapin`. Every `connect` opens a brand new AMQP connection.
#[derive(Debug, Default, Clone)]
pub struct LapinTransport;

impl LapinTransport {
    pub fn new() -> Self {
        Self
    }

    /// URI lapin connects to. lapin only speaks AMQP over TCP/TLS, so a
    /// WebSockets preference resolves to the AMQP port.
    pub fn resolve_uri(options: &ConnectOptions) -> Result<AMQPUri, AmqpError> {
        options
            .connection_string
            .to_amqp_uri(TransportType::Amqp)
            .parse::<AMQPUri>()
            .map_err(|err| AmqpError::InvalidConnectionString(ConnectionStringError::InvalidUri(err)))
    }
}

#[async_trait]
impl Transport for LapinTransport {
    type Connection = LapinConnection;

    async fn connect(&self, options: &ConnectOptions) -> Result<LapinConnection, AmqpError> {
        let uri = Self::resolve_uri(options)?;
        if options.transport_type == TransportType::AmqpWebSockets {
            warn!(target: "app", "connect - WebSockets transport is not available with lapin, using AMQP on {}:{}", uri.authority.host, uri.authority.port);
        }
        info!(target: "app", "connect - creating AMQP connection to {}:{}", uri.authority.host, uri.authority.port);
        let properties = ConnectionProperties::default()
            .with_executor(tokio_executor_trait::Tokio::current())
            .with_reactor(tokio_reactor_trait::Tokio);
        let connection = Connection::connect_uri(uri, properties)
            .await
            .map_err(|err| {
                error!(target: "app", "connect - cannot create AMQP connection. Err = {:?}", err);
                AmqpError::Connect(err)
            })?;
        connection.on_error(|err| {
            error!(target: "app", "connect - AMQP connection error = {:?}", err);
        });
        info!(target: "app", "connect - AMQP connection established");
        Ok(LapinConnection {
            connection,
            max_message_size: options.max_message_size,
            closed: false,
        })
    }
}

pub struct LapinConnection {
    connection: Connection,
    max_message_size: usize,
    closed: bool,
}

#[async_trait]
impl TransportConnection for LapinConnection {
    type Sender = LapinSender;

    async fn create_sender(&mut self, destination: &Destination) -> Result<LapinSender, AmqpError> {
        info!(target: "app", "create_sender - creating AMQP channel for queue {}", destination);
        let channel = self.connection.create_channel().await.map_err(AmqpError::Channel)?;
        channel
            .confirm_select(ConfirmSelectOptions::default())
            .await
            .map_err(AmqpError::Channel)?;
        channel
            .queue_declare(
                destination.name(),
                QueueDeclareOptions::default(),
                FieldTable::default(),
            )
            .await
            .map_err(|source| AmqpError::QueueDeclare {
                queue: destination.name().to_string(),
                source,
            })?;
        debug!(target: "app", "create_sender - AMQP queue {} declared", destination);
        Ok(LapinSender::new(channel, destination.clone(), self.max_message_size))
    }

    async fn close(&mut self) -> Result<(), AmqpError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if !self.connection.status().connected() {
            debug!(target: "app", "close - AMQP connection already closed");
            return Ok(());
        }
        self.connection
            .close(CLOSE_REPLY_CODE, CLOSE_REPLY_TEXT)
            .await
            .map_err(AmqpError::Close)
    }
}

use crate::config::Env;
use crate::errors::config_error::ConfigError;
use crate::models::connection_string::ConnectionString;
use crate::models::destination::Destination;
use crate::models::transport_type::TransportType;
use crate::transport::ConnectOptions;

#[derive(Debug, Clone)]
pub struct PublisherConfig {
    pub connection_string: ConnectionString,
    pub destination: Destination,
    pub transport_type: TransportType,
    pub max_message_size: usize,
}

impl PublisherConfig {
    pub fn new(env: &Env) -> Result<Self, ConfigError> {
        if env.service_bus_max_message_size == 0 {
            return Err(ConfigError::ZeroMaxMessageSize);
        }
        Ok(Self {
            connection_string: ConnectionString::parse(&env.service_bus_connection_string)?,
            destination: Destination::new(&env.service_bus_queue)?,
            transport_type: env.service_bus_transport.parse()?,
            max_message_size: env.service_bus_max_message_size,
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions::new(
            self.connection_string.clone(),
            self.transport_type,
            self.max_message_size,
        )
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::config_error::ConfigError;

/// Wire mode used to reach the broker. WebSockets go through port 443,
/// which is open in environments where raw AMQP ports are blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Amqp,
    #[default]
    AmqpWebSockets,
}

impl TransportType {
    pub fn default_port(&self) -> u16 {
        match self {
            TransportType::Amqp => 5671,
            TransportType::AmqpWebSockets => 443,
        }
    }
}

impl FromStr for TransportType {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "amqp" | "amqp_tcp" => Ok(TransportType::Amqp),
            "amqp_websockets" | "amqpwebsockets" | "websockets" => Ok(TransportType::AmqpWebSockets),
            _ => Err(ConfigError::InvalidTransportType(value.to_string())),
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransportType::Amqp => fmt.write_str("amqp"),
            TransportType::AmqpWebSockets => fmt.write_str("amqp_websockets"),
        }
    }
}

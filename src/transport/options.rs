use crate::models::connection_string::ConnectionString;
use crate::models::transport_type::TransportType;

#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub connection_string: ConnectionString,
    pub transport_type: TransportType,
    pub max_message_size: usize,
}

impl ConnectOptions {
    pub fn new(connection_string: ConnectionString, transport_type: TransportType, max_message_size: usize) -> Self {
        Self {
            connection_string,
            transport_type,
            max_message_size,
        }
    }
}

pub mod connection_string;
pub mod destination;
pub mod message;
pub mod transport_type;

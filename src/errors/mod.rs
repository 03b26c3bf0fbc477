pub mod amqp_error;
pub mod config_error;
pub mod connection_string_error;
pub mod publish_error;

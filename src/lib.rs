pub mod amqp;
pub mod config;
pub mod errors;
pub mod models;
pub mod publisher;
pub mod transport;

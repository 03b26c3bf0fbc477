use std::path::Path;

use dotenvy::dotenv;
use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde::Deserialize;

use crate::errors::config_error::ConfigError;

pub const LOG4RS_CONFIG_FILE: &str = "log4rs.yaml";
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 256 * 1024;

#[derive(Deserialize, Debug)]
pub struct Env {
    pub service_bus_connection_string: String,
    pub service_bus_queue: String,
    #[serde(default = "default_transport")]
    pub service_bus_transport: String,
    #[serde(default = "default_max_message_size")]
    pub service_bus_max_message_size: usize,
}

fn default_transport() -> String {
    "amqp_websockets".to_string()
}

fn default_max_message_size() -> usize {
    DEFAULT_MAX_MESSAGE_SIZE
}

/// Loads `.env`, reads the environment and prints it.
pub fn init() -> Result<Env, ConfigError> {
    // Load the .env file
    dotenv().ok();
    let env = envy::from_env::<Env>()?;
    print_env(&env);
    Ok(env)
}

/// Configures log4rs from `log4rs.yaml` if present, otherwise logs to the console.
/// Fails if a logger is already installed.
pub fn init_logger() -> Result<(), ConfigError> {
    init_logger_from(Path::new(LOG4RS_CONFIG_FILE))
}

pub fn init_logger_from(config_file: &Path) -> Result<(), ConfigError> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|err| ConfigError::Logger(err.to_string()))?;
    } else {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}",
            )))
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .build(Root::builder().appender("stdout").build(LevelFilter::Info))
            .map_err(|err| ConfigError::Logger(err.to_string()))?;
        log4rs::init_config(config).map_err(|err| ConfigError::Logger(err.to_string()))?;
    }
    info!(target: "app", "Logger initialized");
    Ok(())
}

pub fn print_env(env: &Env) {
    info!(target: "app", "service_bus_connection_string = {}", mask_secret(&env.service_bus_connection_string));
    info!(target: "app", "service_bus_queue = {}", env.service_bus_queue);
    info!(target: "app", "service_bus_transport = {}", env.service_bus_transport);
    info!(target: "app", "service_bus_max_message_size = {}", env.service_bus_max_message_size);
}

// keeps the first characters, enough to recognize which namespace is in use
fn mask_secret(value: &str) -> String {
    let visible: String = value.chars().take(12).collect();
    format!("{}***", visible)
}

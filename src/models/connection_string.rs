use std::fmt;

use crate::errors::connection_string_error::ConnectionStringError;
use crate::models::transport_type::TransportType;

/// Credentials to reach the broker, either a plain AMQP URI or a
/// key/value string like `Endpoint=sb://host/;SharedAccessKeyName=..;SharedAccessKey=..`.
#[derive(Clone, PartialEq, Eq)]
pub enum ConnectionString {
    Uri(String),
    SharedAccess {
        host: String,
        key_name: Option<String>,
        key: Option<String>,
        entity_path: Option<String>,
    },
}

impl ConnectionString {
    pub fn parse(value: &str) -> Result<Self, ConnectionStringError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConnectionStringError::Empty);
        }
        if value.starts_with("amqp://") || value.starts_with("amqps://") {
            return Ok(ConnectionString::Uri(value.to_string()));
        }

        let mut endpoint: Option<String> = None;
        let mut key_name: Option<String> = None;
        let mut key: Option<String> = None;
        let mut entity_path: Option<String> = None;
        for segment in value.split(';').filter(|s| !s.trim().is_empty()) {
            // keys may contain '=' padding, so split on the first one only
            let (name, val) = segment
                .split_once('=')
                .ok_or_else(|| ConnectionStringError::MalformedSegment(segment.to_string()))?;
            let val = val.trim().to_string();
            match name.trim().to_ascii_lowercase().as_str() {
                "endpoint" => endpoint = Some(val),
                "sharedaccesskeyname" => key_name = Some(val),
                "sharedaccesskey" => key = Some(val),
                "entitypath" => entity_path = Some(val),
                _ => {}
            }
        }

        let endpoint = endpoint.ok_or(ConnectionStringError::MissingEndpoint)?;
        let host = Self::host_from_endpoint(&endpoint)?;
        if key_name.is_some() && key.is_none() {
            return Err(ConnectionStringError::MissingSharedAccessKey);
        }
        Ok(ConnectionString::SharedAccess {
            host,
            key_name,
            key,
            entity_path,
        })
    }

    fn host_from_endpoint(endpoint: &str) -> Result<String, ConnectionStringError> {
        let without_scheme = match endpoint.split_once("://") {
            Some((_, rest)) => rest,
            None => endpoint,
        };
        let host = without_scheme.split('/').next().unwrap_or_default().trim();
        if host.is_empty() {
            return Err(ConnectionStringError::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(host.to_string())
    }

    pub fn entity_path(&self) -> Option<&str> {
        match self {
            ConnectionString::Uri(_) => None,
            ConnectionString::SharedAccess { entity_path, .. } => entity_path.as_deref(),
        }
    }

    /// Resolve to an `amqp(s)://` URI usable by the AMQP client.
    pub fn to_amqp_uri(&self, transport_type: TransportType) -> String {
        match self {
            ConnectionString::Uri(uri) => uri.clone(),
            ConnectionString::SharedAccess {
                host, key_name, key, ..
            } => {
                let port = transport_type.default_port();
                match (key_name, key) {
                    (Some(name), Some(key)) => format!(
                        "amqps://{}:{}@{}:{}",
                        urlencoding::encode(name),
                        urlencoding::encode(key),
                        host,
                        port
                    ),
                    _ => format!("amqps://{}:{}", host, port),
                }
            }
        }
    }
}

// never print the shared access key
impl fmt::Debug for ConnectionString {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConnectionString::Uri(uri) => {
                let masked = match (uri.split_once("://"), uri.rfind('@')) {
                    (Some((scheme, _)), Some(at)) => format!("{}://***{}", scheme, &uri[at..]),
                    _ => uri.clone(),
                };
                fmt.debug_tuple("Uri").field(&masked).finish()
            }
            ConnectionString::SharedAccess {
                host,
                key_name,
                entity_path,
                ..
            } => fmt
                .debug_struct("SharedAccess")
                .field("host", host)
                .field("key_name", key_name)
                .field("key", &"***")
                .field("entity_path", entity_path)
                .finish(),
        }
    }
}

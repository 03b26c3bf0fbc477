use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single outbound message: the payload rendered as UTF-8 JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    body: String,
    content_type: &'static str,
}

impl OutboundMessage {
    pub fn new(body: String) -> Self {
        Self {
            body,
            content_type: JSON_CONTENT_TYPE,
        }
    }

    pub fn from_payload<T>(payload: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload)?;
        Ok(Self::new(body))
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Size of the body in bytes, as counted against batch limits.
    pub fn size(&self) -> usize {
        self.body.len()
    }
}

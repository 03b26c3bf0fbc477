use crate::models::message::OutboundMessage;
use crate::transport::MessageBatch;

/// Messages waiting to be published, bounded by the total body size.
#[derive(Debug)]
pub struct LapinBatch {
    messages: Vec<OutboundMessage>,
    size_in_bytes: usize,
    max_size_in_bytes: usize,
}

impl LapinBatch {
    pub fn new(max_size_in_bytes: usize) -> Self {
        Self {
            messages: Vec::new(),
            size_in_bytes: 0,
            max_size_in_bytes,
        }
    }

    pub fn into_messages(self) -> Vec<OutboundMessage> {
        self.messages
    }
}

impl MessageBatch for LapinBatch {
    fn try_add(&mut self, message: OutboundMessage) -> bool {
        let new_size = self.size_in_bytes + message.size();
        if new_size > self.max_size_in_bytes {
            return false;
        }
        self.size_in_bytes = new_size;
        self.messages.push(message);
        true
    }

    fn len(&self) -> usize {
        self.messages.len()
    }

    fn size_in_bytes(&self) -> usize {
        self.size_in_bytes
    }

    fn max_size_in_bytes(&self) -> usize {
        self.max_size_in_bytes
    }
}

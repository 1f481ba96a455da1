//! Shared channels and registries for router tests.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;

use fanout_router::{
    Channel, ChannelRef, InMemoryChannelRegistry, Message, QueueChannel, SendError,
};

/// A queue channel plus the handle a resolver or registry holds.
pub fn queue(name: &str) -> (QueueChannel<String>, ChannelRef<String>) {
    let channel = QueueChannel::<String>::new(name);
    let handle: ChannelRef<String> = Arc::new(channel.clone());
    (channel, handle)
}

/// A registry with one queue channel per name; the queues are returned in the same order.
pub fn registry_with(
    names: &[&str],
) -> (Arc<InMemoryChannelRegistry<String>>, Vec<QueueChannel<String>>) {
    let registry = Arc::new(InMemoryChannelRegistry::<String>::new());
    let queues = names
        .iter()
        .map(|name| {
            let (channel, handle) = queue(name);
            registry.register(handle);
            channel
        })
        .collect();
    (registry, queues)
}

pub fn message(payload: &str) -> Message<String> {
    Message::from_payload(payload.to_string())
}

/// Appends `"<channel>:<payload>"` to a log shared by several channels, so
/// tests can check the order deliveries happened in.
pub struct RecordingChannel {
    name: String,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingChannel {
    pub fn new(name: impl Into<String>, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.into(),
            log,
        }
    }
}

impl Channel<String> for RecordingChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: &Message<String>) -> Result<(), SendError> {
        self.log.lock().push(format!("{}:{}", self.name, message.payload));
        Ok(())
    }
}

/// Rejects every message.
pub struct RejectingChannel {
    name: String,
}

impl RejectingChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Channel<String> for RejectingChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, _message: &Message<String>) -> Result<(), SendError> {
        Err(SendError::Rejected {
            channel: self.name.clone(),
            reason: "maintenance".to_string(),
        })
    }
}

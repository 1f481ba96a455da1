//! Core channel trait.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::message::Message;

/// Shared handle to a channel, as produced by resolvers and registries.
pub type ChannelRef<T> = Arc<dyn Channel<T>>;

/// Error type for channel send operations.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// A bounded channel had no free capacity before its send timeout
    #[error("channel {channel} is full (capacity {capacity})")]
    Full { channel: String, capacity: usize },
    /// The channel no longer accepts messages
    #[error("channel {channel} is closed")]
    Closed { channel: String },
    /// The channel refused this particular message
    #[error("channel {channel} rejected message: {reason}")]
    Rejected { channel: String, reason: String },
    /// Other error
    #[error("send error: {0}")]
    Other(#[source] Box<dyn Error + Send + Sync>),
}

/// A named sink that accepts messages.
///
/// Implementations might include:
/// - `QueueChannel` - For testing and single-process scenarios
/// - A Kafka or NATS topic producer
/// - An HTTP webhook
///
/// `send` blocks until the message has been accepted or rejected. Timeouts and
/// backpressure are the implementation's business.
pub trait Channel<T>: Send + Sync {
    /// The name this channel is known by (used in registries and errors).
    fn name(&self) -> &str;

    /// Deliver a message to this channel.
    fn send(&self, message: &Message<T>) -> Result<(), SendError>;
}

impl<T> fmt::Debug for dyn Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Channel").field(&self.name()).finish()
    }
}

//! Error types for router configuration and routing.

use crate::channel::SendError;

/// The router was configured inconsistently. Raised only by
/// [`RouterBuilder::build`](super::RouterBuilder::build); fix the
/// configuration and build again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("a channel resolver and a channel name resolver are both configured; use exactly one")]
    ConflictingResolvers,
    #[error("no channel resolver or channel name resolver is configured")]
    MissingResolver,
    #[error("a channel name resolver requires a channel registry")]
    MissingRegistry,
}

/// One channel that rejected a message during dispatch.
#[derive(Debug, thiserror::Error)]
#[error("channel {channel} at position {position}: {source}")]
pub struct SendFailure {
    /// Name of the rejecting channel
    pub channel: String,
    /// Index of the channel in the resolved target list
    pub position: usize,
    pub source: SendError,
}

/// A routing call failed. The router itself is unaffected and can keep routing.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// A resolved name is not in the registry; nothing was sent.
    #[error("channel not found: {name} (position {position})")]
    ChannelNotFound { name: String, position: usize },
    /// One or more channels rejected the message. The others still received it.
    #[error("failed to deliver message to {}", describe_failures(.failures))]
    SendFailed { failures: Vec<SendFailure> },
    /// Resolution produced no targets while resolution is required.
    #[error("no channels resolved for message {message_id}")]
    NoChannelsResolved { message_id: String },
}

impl DeliveryError {
    /// Name of the unresolved channel, for `ChannelNotFound`.
    pub fn missing_channel(&self) -> Option<&str> {
        match self {
            DeliveryError::ChannelNotFound { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Channels that rejected the message, for `SendFailed`.
    pub fn failures(&self) -> &[SendFailure] {
        match self {
            DeliveryError::SendFailed { failures } => failures,
            _ => &[],
        }
    }
}

fn describe_failures(failures: &[SendFailure]) -> String {
    let names: Vec<_> = failures.iter().map(|f| f.channel.as_str()).collect();
    format!("{} channel(s): {}", failures.len(), names.join(", "))
}

//! Channels - named message sinks and the registry that looks them up by name.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 ChannelRegistry (per router)                 │
//! │  lookup(name) -> Option<ChannelRef>                          │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Channel Trait                           │
//! │  name() / send(message) -> Result<(), SendError>            │
//! └─────────────────────────────────────────────────────────────┘
//!          │                  │                     │
//!          ▼                  ▼                     ▼
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────────────┐
//! │QueueChannel │    │ KafkaTopic  │    │  WebhookChannel     │
//! │ (included)  │    │ (external)  │    │    (external)       │
//! └─────────────┘    └─────────────┘    └─────────────────────┘
//! ```
//!
//! Anything that can accept a [`Message`](crate::Message) implements
//! [`Channel`]. The router holds channels as [`ChannelRef`]s and never cares
//! how they queue, block or apply backpressure.

mod channel;
mod queue;
mod registry;

pub use channel::{Channel, ChannelRef, SendError};
pub use queue::QueueChannel;
pub use registry::{ChannelRegistry, InMemoryChannelRegistry};

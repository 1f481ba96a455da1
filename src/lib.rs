//! Synchronous fan-out routing.
//!
//! A [`MultiChannelRouter`] takes one message, works out which channels it
//! should go to, and sends it to every one of them. Targets come either
//! straight from a [`ChannelResolver`] or as names from a
//! [`ChannelNameResolver`], resolved through a [`ChannelRegistry`].
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use fanout_router::{ChannelRef, Message, QueueChannel, RouterBuilder};
//!
//! let audit = QueueChannel::<String>::new("audit");
//! let billing = QueueChannel::<String>::new("billing");
//! let targets: Vec<ChannelRef<String>> = vec![Arc::new(audit.clone()), Arc::new(billing.clone())];
//!
//! let router = RouterBuilder::new()
//!     .channel_resolver(move |_: &Message<String>| targets.clone())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(router.route(&Message::new("msg-1", "test".to_string())).unwrap(), 2);
//! assert_eq!(audit.receive(25).unwrap().payload, "test");
//! assert_eq!(billing.receive(25).unwrap().payload, "test");
//! ```

pub mod channel;
mod config;
mod message;
pub mod router;

pub use channel::{
    Channel, ChannelRef, ChannelRegistry, InMemoryChannelRegistry, QueueChannel, SendError,
};
pub use config::{ConfigError, RouterConfig};
pub use message::{Message, PayloadError};
pub use router::{
    ChannelNameResolver, ChannelResolver, ConfigurationError, DeliveryError, HeaderChannelNames,
    MultiChannelRouter, ResolutionStrategy, RouterBuilder, SendFailure, StaticChannelNames,
};

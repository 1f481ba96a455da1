//! Multi-channel router - resolve a message's targets, then fan out to all of them.
//!
//! A router is configured with exactly one resolution strategy:
//!
//! - a [`ChannelResolver`] that returns the target channels directly, or
//! - a [`ChannelNameResolver`] that returns channel names, looked up in a
//!   [`ChannelRegistry`](crate::channel::ChannelRegistry).
//!
//! Configuration lives in a [`RouterBuilder`]; [`RouterBuilder::build`]
//! validates it once and returns an immutable [`MultiChannelRouter`].
//!
//! ## Routing
//!
//! ```text
//!   route(message)
//!        │
//!        ▼
//!   resolution ── unknown name ──► DeliveryError::ChannelNotFound (nothing sent)
//!        │
//!        ▼
//!   dispatch: send to each target in order, collecting rejections
//!        │
//!        ▼
//!   Ok(delivered) or DeliveryError::SendFailed { failures }
//! ```

mod builder;
mod error;
mod resolver;
mod router;
mod strategy;

pub use builder::RouterBuilder;
pub use error::{ConfigurationError, DeliveryError, SendFailure};
pub use resolver::{ChannelNameResolver, ChannelResolver, HeaderChannelNames, StaticChannelNames};
pub use router::MultiChannelRouter;
pub use strategy::ResolutionStrategy;

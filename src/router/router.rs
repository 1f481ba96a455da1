//! The validated router and its dispatch loop.

use std::fmt;

use tracing::{debug, trace, warn};

use super::error::{DeliveryError, SendFailure};
use super::strategy::ResolutionStrategy;
use crate::channel::ChannelRef;
use crate::message::Message;

/// Routes each message to every channel its resolution strategy produces.
///
/// Built by [`RouterBuilder::build`](super::RouterBuilder::build). The
/// configuration is frozen, so a router can be cloned and shared across
/// threads; `route` keeps no per-message state.
pub struct MultiChannelRouter<T> {
    strategy: ResolutionStrategy<T>,
    resolution_required: bool,
    ignore_send_failures: bool,
}

impl<T> Clone for MultiChannelRouter<T> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
            resolution_required: self.resolution_required,
            ignore_send_failures: self.ignore_send_failures,
        }
    }
}

impl<T> fmt::Debug for MultiChannelRouter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiChannelRouter")
            .field("strategy", &self.strategy.kind())
            .field("resolution_required", &self.resolution_required)
            .field("ignore_send_failures", &self.ignore_send_failures)
            .finish()
    }
}

impl<T> MultiChannelRouter<T> {
    pub(super) fn new(
        strategy: ResolutionStrategy<T>,
        resolution_required: bool,
        ignore_send_failures: bool,
    ) -> Self {
        Self {
            strategy,
            resolution_required,
            ignore_send_failures,
        }
    }

    pub fn strategy(&self) -> &ResolutionStrategy<T> {
        &self.strategy
    }

    pub fn resolution_required(&self) -> bool {
        self.resolution_required
    }

    pub fn ignores_send_failures(&self) -> bool {
        self.ignore_send_failures
    }

    /// Resolve the targets for a message without sending anything.
    pub fn resolve(&self, message: &Message<T>) -> Result<Vec<ChannelRef<T>>, DeliveryError> {
        let targets = self.strategy.resolve(message)?;
        if targets.is_empty() && self.resolution_required {
            warn!(message_id = %message.id, "no channels resolved");
            return Err(DeliveryError::NoChannelsResolved {
                message_id: message.id.clone(),
            });
        }
        Ok(targets)
    }

    /// Deliver a message to every resolved channel, in resolution order.
    ///
    /// Resolution happens first and is all-or-nothing, so an unknown channel
    /// name fails the call before any channel is touched. During dispatch a
    /// rejecting channel does not stop delivery to the rest; every rejection
    /// is collected into [`DeliveryError::SendFailed`].
    ///
    /// Returns the number of channels that accepted the message.
    pub fn route(&self, message: &Message<T>) -> Result<usize, DeliveryError> {
        let targets = self.resolve(message)?;

        let mut delivered = 0;
        let mut failures = Vec::new();
        for (position, channel) in targets.iter().enumerate() {
            trace!(message_id = %message.id, channel = channel.name(), position, "sending");
            match channel.send(message) {
                Ok(()) => delivered += 1,
                Err(source) => {
                    warn!(
                        message_id = %message.id,
                        channel = channel.name(),
                        position,
                        error = %source,
                        "send failed"
                    );
                    failures.push(SendFailure {
                        channel: channel.name().to_string(),
                        position,
                        source,
                    });
                }
            }
        }

        debug!(
            message_id = %message.id,
            targets = targets.len(),
            delivered,
            failed = failures.len(),
            "routed message"
        );

        if failures.is_empty() || self.ignore_send_failures {
            Ok(delivered)
        } else {
            Err(DeliveryError::SendFailed { failures })
        }
    }
}

//! The resolution phase: turning a message into a concrete target list.

use std::sync::Arc;

use tracing::warn;

use super::error::DeliveryError;
use super::resolver::{ChannelNameResolver, ChannelResolver};
use crate::channel::{ChannelRef, ChannelRegistry};
use crate::message::Message;

/// How a built router finds its targets. Exactly one strategy per router.
pub enum ResolutionStrategy<T> {
    /// The resolver returns channels; they are the target list verbatim.
    Direct(Arc<dyn ChannelResolver<T>>),
    /// The resolver returns names, each looked up in the registry in order.
    ByName {
        resolver: Arc<dyn ChannelNameResolver<T>>,
        registry: Arc<dyn ChannelRegistry<T>>,
    },
}

impl<T> Clone for ResolutionStrategy<T> {
    fn clone(&self) -> Self {
        match self {
            ResolutionStrategy::Direct(resolver) => {
                ResolutionStrategy::Direct(Arc::clone(resolver))
            }
            ResolutionStrategy::ByName { resolver, registry } => ResolutionStrategy::ByName {
                resolver: Arc::clone(resolver),
                registry: Arc::clone(registry),
            },
        }
    }
}

impl<T> ResolutionStrategy<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionStrategy::Direct(_) => "direct",
            ResolutionStrategy::ByName { .. } => "by-name",
        }
    }

    /// Resolve the ordered target list for a message.
    ///
    /// Name lookups are all-or-nothing: the first unknown name fails the
    /// whole resolution, so no partially resolved list ever reaches dispatch.
    pub fn resolve(&self, message: &Message<T>) -> Result<Vec<ChannelRef<T>>, DeliveryError> {
        match self {
            ResolutionStrategy::Direct(resolver) => Ok(resolver.resolve(message)),
            ResolutionStrategy::ByName { resolver, registry } => resolver
                .resolve(message)
                .into_iter()
                .enumerate()
                .map(|(position, name)| match registry.lookup(&name) {
                    Some(channel) => Ok(channel),
                    None => {
                        warn!(
                            message_id = %message.id,
                            channel = %name,
                            position,
                            "channel not found"
                        );
                        Err(DeliveryError::ChannelNotFound { name, position })
                    }
                })
                .collect(),
        }
    }
}

impl<T> std::fmt::Debug for ResolutionStrategy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ResolutionStrategy").field(&self.kind()).finish()
    }
}

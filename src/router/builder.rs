//! Router configuration and the one-time validation step.

use std::sync::Arc;

use tracing::debug;

use super::error::ConfigurationError;
use super::resolver::{ChannelNameResolver, ChannelResolver, StaticChannelNames};
use super::router::MultiChannelRouter;
use super::strategy::ResolutionStrategy;
use crate::channel::ChannelRegistry;
use crate::config::RouterConfig;

/// Collects router configuration; [`build`](Self::build) validates it and
/// produces an immutable [`MultiChannelRouter`].
///
/// Setters only store values. All checks happen in `build`, which borrows the
/// builder, so a failed build can be corrected and retried.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use fanout_router::{InMemoryChannelRegistry, Message, QueueChannel, RouterBuilder};
///
/// let registry = Arc::new(InMemoryChannelRegistry::<String>::new());
/// let audit = QueueChannel::<String>::new("audit");
/// registry.register(Arc::new(audit.clone()));
///
/// let router = RouterBuilder::new()
///     .channel_name_resolver(|_: &Message<String>| vec!["audit".to_string()])
///     .channel_registry(registry)
///     .build()
///     .unwrap();
///
/// router.route(&Message::new("msg-1", "test".to_string())).unwrap();
/// assert_eq!(audit.receive(25).unwrap().payload, "test");
/// ```
pub struct RouterBuilder<T> {
    channel_resolver: Option<Arc<dyn ChannelResolver<T>>>,
    channel_name_resolver: Option<Arc<dyn ChannelNameResolver<T>>>,
    channel_registry: Option<Arc<dyn ChannelRegistry<T>>>,
    resolution_required: bool,
    ignore_send_failures: bool,
}

impl<T> Default for RouterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouterBuilder<T> {
    pub fn new() -> Self {
        Self {
            channel_resolver: None,
            channel_name_resolver: None,
            channel_registry: None,
            resolution_required: false,
            ignore_send_failures: false,
        }
    }

    /// Start from loaded configuration.
    ///
    /// A non-empty `channels` list installs a [`StaticChannelNames`] name
    /// resolver; a registry still has to be supplied before `build`.
    pub fn from_config(config: &RouterConfig) -> Self {
        let builder = Self::new()
            .resolution_required(config.resolution_required)
            .ignore_send_failures(config.ignore_send_failures);
        if config.channels.is_empty() {
            builder
        } else {
            builder.channel_name_resolver(StaticChannelNames::new(config.channels.iter().cloned()))
        }
    }

    /// Resolve targets directly to channels.
    pub fn channel_resolver<R>(mut self, resolver: R) -> Self
    where
        R: ChannelResolver<T> + 'static,
    {
        self.channel_resolver = Some(Arc::new(resolver));
        self
    }

    /// Resolve targets to channel names, looked up in the channel registry.
    pub fn channel_name_resolver<R>(mut self, resolver: R) -> Self
    where
        R: ChannelNameResolver<T> + 'static,
    {
        self.channel_name_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn channel_registry<G>(mut self, registry: Arc<G>) -> Self
    where
        G: ChannelRegistry<T> + 'static,
    {
        self.channel_registry = Some(registry);
        self
    }

    pub fn clear_channel_resolver(mut self) -> Self {
        self.channel_resolver = None;
        self
    }

    pub fn clear_channel_name_resolver(mut self) -> Self {
        self.channel_name_resolver = None;
        self
    }

    pub fn clear_channel_registry(mut self) -> Self {
        self.channel_registry = None;
        self
    }

    /// Fail routing calls whose resolution yields no channels (default: off).
    pub fn resolution_required(mut self, required: bool) -> Self {
        self.resolution_required = required;
        self
    }

    /// Log send failures instead of returning them (default: off).
    pub fn ignore_send_failures(mut self, ignore: bool) -> Self {
        self.ignore_send_failures = ignore;
        self
    }

    /// Validate the configuration and freeze it into a router.
    ///
    /// Exactly one of the channel resolver and the channel name resolver must
    /// be set, and the name resolver needs a registry.
    pub fn build(&self) -> Result<MultiChannelRouter<T>, ConfigurationError> {
        let strategy = match (
            &self.channel_resolver,
            &self.channel_name_resolver,
            &self.channel_registry,
        ) {
            (Some(_), Some(_), _) => return Err(ConfigurationError::ConflictingResolvers),
            (None, None, _) => return Err(ConfigurationError::MissingResolver),
            (None, Some(_), None) => return Err(ConfigurationError::MissingRegistry),
            (Some(resolver), None, registry) => {
                if registry.is_some() {
                    debug!("channel registry is unused by a direct channel resolver");
                }
                ResolutionStrategy::Direct(Arc::clone(resolver))
            }
            (None, Some(resolver), Some(registry)) => ResolutionStrategy::ByName {
                resolver: Arc::clone(resolver),
                registry: Arc::clone(registry),
            },
        };

        debug!(
            strategy = strategy.kind(),
            resolution_required = self.resolution_required,
            ignore_send_failures = self.ignore_send_failures,
            "router configured"
        );

        Ok(MultiChannelRouter::new(
            strategy,
            self.resolution_required,
            self.ignore_send_failures,
        ))
    }
}

//! Channel lookup by name.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use super::ChannelRef;

/// Name -> channel lookup used by name-based routing.
///
/// An unknown name is `None`, never a panic. Implementations must be safe
/// for concurrent lookups; routers call `lookup` from whatever thread routes.
pub trait ChannelRegistry<T>: Send + Sync {
    /// Find the channel registered under `name`.
    fn lookup(&self, name: &str) -> Option<ChannelRef<T>>;
}

/// In-memory registry backed by a `RwLock<HashMap<String, ChannelRef>>`.
///
/// Registration takes `&self`, so a registry can be shared behind an `Arc`
/// with routers while channels keep being added.
pub struct InMemoryChannelRegistry<T> {
    channels: RwLock<HashMap<String, ChannelRef<T>>>,
}

impl<T> Default for InMemoryChannelRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryChannelRegistry<T> {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Register a channel under its own name, replacing any previous holder.
    pub fn register(&self, channel: ChannelRef<T>) -> Option<ChannelRef<T>> {
        let name = channel.name().to_string();
        self.register_as(name, channel)
    }

    /// Register a channel under an explicit name (aliasing is allowed).
    pub fn register_as(
        &self,
        name: impl Into<String>,
        channel: ChannelRef<T>,
    ) -> Option<ChannelRef<T>> {
        let name = name.into();
        debug!(channel = %name, "registering channel");
        self.channels.write().insert(name, channel)
    }

    pub fn unregister(&self, name: &str) -> Option<ChannelRef<T>> {
        let removed = self.channels.write().remove(name);
        if removed.is_some() {
            debug!(channel = %name, "unregistered channel");
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.channels.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.channels.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.read().is_empty()
    }
}

impl<T> ChannelRegistry<T> for InMemoryChannelRegistry<T> {
    fn lookup(&self, name: &str) -> Option<ChannelRef<T>> {
        self.channels.read().get(name).cloned()
    }
}

//! Caller-supplied strategies that pick a message's targets.

use crate::channel::ChannelRef;
use crate::message::Message;

/// Produces the target channels for a message directly.
///
/// Any `Fn(&Message<T>) -> Vec<ChannelRef<T>>` closure is a resolver. An
/// empty list means "deliver nowhere" and is not an error by itself.
pub trait ChannelResolver<T>: Send + Sync {
    fn resolve(&self, message: &Message<T>) -> Vec<ChannelRef<T>>;
}

impl<T, F> ChannelResolver<T> for F
where
    F: Fn(&Message<T>) -> Vec<ChannelRef<T>> + Send + Sync,
{
    fn resolve(&self, message: &Message<T>) -> Vec<ChannelRef<T>> {
        self(message)
    }
}

/// Produces the names of a message's target channels, to be looked up in a
/// [`ChannelRegistry`](crate::channel::ChannelRegistry).
///
/// Any `Fn(&Message<T>) -> Vec<String>` closure is a name resolver.
pub trait ChannelNameResolver<T>: Send + Sync {
    fn resolve(&self, message: &Message<T>) -> Vec<String>;
}

impl<T, F> ChannelNameResolver<T> for F
where
    F: Fn(&Message<T>) -> Vec<String> + Send + Sync,
{
    fn resolve(&self, message: &Message<T>) -> Vec<String> {
        self(message)
    }
}

/// The same recipient list for every message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticChannelNames {
    names: Vec<String>,
}

impl StaticChannelNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl<T> ChannelNameResolver<T> for StaticChannelNames {
    fn resolve(&self, _message: &Message<T>) -> Vec<String> {
        self.names.clone()
    }
}

/// Reads the recipient list from a message header.
///
/// The header value is a comma-separated list of channel names; blanks are
/// skipped. A message without the header resolves to no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderChannelNames {
    header: String,
}

impl HeaderChannelNames {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

impl<T> ChannelNameResolver<T> for HeaderChannelNames {
    fn resolve(&self, message: &Message<T>) -> Vec<String> {
        message
            .header(&self.header)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

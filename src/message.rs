//! The message envelope carried through the router.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable envelope around a payload of type `T`.
///
/// The router only ever borrows a message; channels that need to keep it
/// (like [`QueueChannel`](crate::channel::QueueChannel)) clone it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message<T> {
    /// Unique identifier for this message
    pub id: String,
    /// Optional headers (correlation IDs, origin, etc.)
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    /// The payload
    pub payload: T,
}

impl<T> Message<T> {
    /// Create a message with an explicit id.
    pub fn new(id: impl Into<String>, payload: T) -> Self {
        Self {
            id: id.into(),
            headers: Vec::new(),
            payload,
        }
    }

    /// Create a message with a random (UUID v4) id.
    pub fn from_payload(payload: T) -> Self {
        Self::new(Uuid::new_v4().to_string(), payload)
    }

    /// Add a header to the message.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// First value stored under `key`, if any.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Error when encoding or decoding a binary payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("payload error: {message}")]
pub struct PayloadError {
    pub message: String,
}

impl Message<Vec<u8>> {
    /// Create a message with a bitcode-serialized payload.
    #[cfg(feature = "codec")]
    pub fn encode<V: Serialize>(id: impl Into<String>, value: &V) -> Result<Self, PayloadError> {
        let bytes = bitcode::serialize(value).map_err(|e| PayloadError {
            message: e.to_string(),
        })?;
        Ok(Self::new(id, bytes))
    }

    /// Decode the payload from bitcode binary format.
    #[cfg(feature = "codec")]
    pub fn decode<V: serde::de::DeserializeOwned>(&self) -> Result<V, PayloadError> {
        bitcode::deserialize(&self.payload).map_err(|e| PayloadError {
            message: e.to_string(),
        })
    }

    /// Get the payload as a string (if valid UTF-8).
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

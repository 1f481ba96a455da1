//! In-memory queue channel for testing and single-process scenarios.
//!
//! This module provides a thread-safe FIFO channel that can be handed to a
//! router as a delivery target and drained by a consumer, useful for:
//! - Unit and integration testing without external dependencies
//! - Single-process pipelines
//! - Development and prototyping

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use super::{Channel, SendError};
use crate::message::Message;

/// In-memory queue channel.
///
/// Features:
/// - Thread-safe (clones share the same queue)
/// - Optionally bounded; a full queue waits up to the send timeout, then rejects
/// - `receive(timeout_ms)` blocks until a message arrives or the timeout expires
/// - Can be closed, after which sends are rejected and receivers drain what is left
///
/// ## Example
///
/// ```
/// use fanout_router::{Channel, Message, QueueChannel};
///
/// let queue = QueueChannel::new("orders");
/// queue.send(&Message::new("msg-1", "created")).unwrap();
///
/// let message = queue.receive(25).unwrap();
/// assert_eq!(message.payload, "created");
/// ```
pub struct QueueChannel<T> {
    name: String,
    capacity: Option<usize>,
    send_timeout: Duration,
    shared: Arc<Shared<T>>,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
    not_full: Condvar,
}

struct State<T> {
    queue: VecDeque<Message<T>>,
    closed: bool,
}

impl<T> Clone for QueueChannel<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            capacity: self.capacity,
            send_timeout: self.send_timeout,
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> QueueChannel<T> {
    /// Create an unbounded queue channel.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name.into(), None)
    }

    /// Create a queue channel holding at most `capacity` messages.
    ///
    /// A capacity of zero is allowed: every send fails with
    /// [`SendError::Full`].
    pub fn bounded(name: impl Into<String>, capacity: usize) -> Self {
        Self::with_capacity(name.into(), Some(capacity))
    }

    fn with_capacity(name: String, capacity: Option<usize>) -> Self {
        Self {
            name,
            capacity,
            send_timeout: Duration::ZERO,
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    queue: VecDeque::new(),
                    closed: false,
                }),
                not_empty: Condvar::new(),
                not_full: Condvar::new(),
            }),
        }
    }

    /// How long `send` waits for free capacity on a full bounded queue.
    ///
    /// Defaults to zero: a full queue rejects immediately.
    pub fn with_send_timeout(mut self, timeout_ms: u64) -> Self {
        self.send_timeout = Duration::from_millis(timeout_ms);
        self
    }

    /// Receive the next message, blocking until one is available or timeout.
    ///
    /// Returns `None` on timeout, or once the channel is closed and empty.
    pub fn receive(&self, timeout_ms: u64) -> Option<Message<T>> {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        let mut state = self.shared.state.lock();

        loop {
            if let Some(message) = state.queue.pop_front() {
                drop(state);
                self.shared.not_full.notify_one();
                return Some(message);
            }
            if state.closed {
                return None;
            }
            if self
                .shared
                .not_empty
                .wait_until(&mut state, deadline)
                .timed_out()
            {
                let message = state.queue.pop_front();
                drop(state);
                if message.is_some() {
                    self.shared.not_full.notify_one();
                }
                return message;
            }
        }
    }

    /// Receive the next message without blocking.
    pub fn try_receive(&self) -> Option<Message<T>> {
        let message = self.shared.state.lock().queue.pop_front();
        if message.is_some() {
            self.shared.not_full.notify_one();
        }
        message
    }

    /// Remove and return every queued message, oldest first.
    pub fn drain(&self) -> Vec<Message<T>> {
        let drained: Vec<_> = self.shared.state.lock().queue.drain(..).collect();
        self.shared.not_full.notify_all();
        drained
    }

    /// Number of messages waiting to be received.
    pub fn len(&self) -> usize {
        self.shared.state.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().queue.is_empty()
    }

    /// Maximum number of queued messages (`None` when unbounded).
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Stop accepting messages. Already-queued messages can still be received.
    pub fn close(&self) {
        self.shared.state.lock().closed = true;
        self.shared.not_empty.notify_all();
        self.shared.not_full.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    /// Discard all queued messages (useful for test cleanup).
    pub fn clear(&self) {
        self.shared.state.lock().queue.clear();
        self.shared.not_full.notify_all();
    }
}

impl<T: Clone + Send> Channel<T> for QueueChannel<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: &Message<T>) -> Result<(), SendError> {
        let mut state = self.shared.state.lock();

        if let Some(capacity) = self.capacity {
            let deadline = Instant::now() + self.send_timeout;
            while !state.closed && state.queue.len() >= capacity {
                if self
                    .shared
                    .not_full
                    .wait_until(&mut state, deadline)
                    .timed_out()
                {
                    break;
                }
            }
            if !state.closed && state.queue.len() >= capacity {
                return Err(SendError::Full {
                    channel: self.name.clone(),
                    capacity,
                });
            }
        }

        if state.closed {
            return Err(SendError::Closed {
                channel: self.name.clone(),
            });
        }

        state.queue.push_back(message.clone());
        drop(state);
        self.shared.not_empty.notify_one();
        Ok(())
    }
}

//! The seam between prompts and Discord.

use crate::error::TransportError;
use crate::marker::Marker;
use crate::surface::Surface;
use async_trait::async_trait;
use overbot_common::{ChannelId, MessageId, UserId};
use std::time::Duration;

/// A sent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle {
    /// Channel the message lives in.
    pub channel: ChannelId,
    /// Message ID.
    pub id: MessageId,
}

impl MessageHandle {
    /// Creates a handle.
    pub const fn new(channel: ChannelId, id: MessageId) -> Self {
        Self { channel, id }
    }
}

/// A user added `marker` to `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    /// Target message.
    pub message: MessageId,
    /// The reaction.
    pub marker: Marker,
    /// Who reacted.
    pub user: UserId,
}

/// Accepts only signals a prompt session should act on.
#[derive(Debug, Clone)]
pub struct SignalFilter {
    /// The session's rendered message.
    pub message: MessageId,
    /// The only user allowed to answer.
    pub invoker: UserId,
    /// The bot's own ID, never accepted.
    pub bot: UserId,
    /// Accepted markers.
    pub markers: Vec<Marker>,
}

impl SignalFilter {
    /// Whether `signal` answers the session.
    pub fn matches(&self, signal: &Signal) -> bool {
        if signal.user != self.invoker {
            return false;
        }
        if signal.user == self.bot {
            return false;
        }
        if signal.message != self.message {
            return false;
        }
        self.markers.contains(&signal.marker)
    }
}

/// Messaging operations a prompt session needs.
///
/// `add_marker` and `delete` are best-effort from the session's point of
/// view: it logs and discards their errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromptTransport: Send + Sync {
    /// The bot's own user ID.
    fn bot_id(&self) -> UserId;

    /// Whether the bot may add reactions in `channel`.
    async fn can_attach_markers(&self, channel: ChannelId) -> bool;

    /// Sends `surface` to `channel`.
    async fn send(&self, channel: ChannelId, surface: &Surface)
        -> Result<MessageHandle, TransportError>;

    /// Adds `marker` as a reaction on `message`.
    async fn add_marker(&self, message: MessageHandle, marker: &Marker)
        -> Result<(), TransportError>;

    /// Deletes `message`.
    async fn delete(&self, message: MessageHandle) -> Result<(), TransportError>;

    /// Waits for the first signal accepted by `filter`, or `None` once
    /// `timeout` elapses.
    async fn wait_for_signal(&self, filter: SignalFilter, timeout: Duration) -> Option<Signal>;
}

//! In-memory [`PromptTransport`] for tests.

use crate::error::TransportError;
use crate::marker::Marker;
use crate::surface::Surface;
use crate::transport::{MessageHandle, PromptTransport, Signal, SignalFilter};
use async_trait::async_trait;
use overbot_common::test_utils::discord_fixtures;
use overbot_common::{ChannelId, MessageId, UserId};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct State {
    next_id: u64,
    sent: Vec<(MessageHandle, Surface)>,
    live: HashMap<MessageHandle, Vec<Marker>>,
    signals: Vec<Signal>,
    marker_attempts: usize,
    delete_attempts: usize,
    deletes: usize,
}

/// Records sent prompts and lets tests react to them.
///
/// Reactions are kept in a log; a waiting session picks the first entry
/// its filter accepts, so a test may react before or after the session
/// starts waiting.
#[derive(Debug)]
pub struct FakeTransport {
    bot: UserId,
    can_attach: bool,
    fail_send: bool,
    fail_marker_at: Option<usize>,
    state: Mutex<State>,
    sent_changed: Notify,
    signals_changed: Notify,
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeTransport {
    /// A transport that accepts everything.
    pub fn new() -> Self {
        Self {
            bot: discord_fixtures::bot_user_id(),
            can_attach: true,
            fail_send: false,
            fail_marker_at: None,
            state: Mutex::new(State {
                next_id: 1,
                ..State::default()
            }),
            sent_changed: Notify::new(),
            signals_changed: Notify::new(),
        }
    }

    /// Reports that reactions are not allowed anywhere.
    #[must_use]
    pub const fn without_marker_permission(mut self) -> Self {
        self.can_attach = false;
        self
    }

    /// Fails every send.
    #[must_use]
    pub const fn failing_send(mut self) -> Self {
        self.fail_send = true;
        self
    }

    /// Fails the `attempt`-th marker attachment (0-based, counted across
    /// all messages) and every one after it.
    #[must_use]
    pub const fn failing_marker_at(mut self, attempt: usize) -> Self {
        self.fail_marker_at = Some(attempt);
        self
    }

    /// Every message sent so far, in order.
    pub fn sent(&self) -> Vec<(MessageHandle, Surface)> {
        self.state.lock().sent.clone()
    }

    /// Whether `message` still exists.
    pub fn is_live(&self, message: MessageHandle) -> bool {
        self.state.lock().live.contains_key(&message)
    }

    /// Markers attached to a live `message`.
    pub fn markers_on(&self, message: MessageHandle) -> Vec<Marker> {
        self.state
            .lock()
            .live
            .get(&message)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of `add_marker` calls.
    pub fn marker_attempts(&self) -> usize {
        self.state.lock().marker_attempts
    }

    /// Number of `delete` calls.
    pub fn delete_attempts(&self) -> usize {
        self.state.lock().delete_attempts
    }

    /// Number of successful deletes.
    pub fn deletes(&self) -> usize {
        self.state.lock().deletes
    }

    /// `user` adds `marker` to `message`.
    pub fn react(&self, message: MessageId, marker: impl Into<Marker>, user: UserId) {
        self.state.lock().signals.push(Signal {
            message,
            marker: marker.into(),
            user,
        });
        self.signals_changed.notify_waiters();
    }

    /// Someone else deletes `message`.
    pub fn delete_externally(&self, message: MessageHandle) {
        self.state.lock().live.remove(&message);
    }

    /// Waits until at least `count` messages were sent and returns the
    /// latest one.
    pub async fn wait_for_sent(&self, count: usize) -> MessageHandle {
        loop {
            let notified = self.sent_changed.notified();
            {
                let state = self.state.lock();
                if state.sent.len() >= count {
                    if let Some((handle, _)) = state.sent.last() {
                        return *handle;
                    }
                }
            }
            notified.await;
        }
    }

    /// Waits until a message was sent to `channel` and returns it.
    pub async fn wait_for_sent_in(&self, channel: ChannelId) -> MessageHandle {
        loop {
            let notified = self.sent_changed.notified();
            if let Some(handle) = self
                .state
                .lock()
                .sent
                .iter()
                .map(|(handle, _)| *handle)
                .find(|handle| handle.channel == channel)
            {
                return handle;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl PromptTransport for FakeTransport {
    fn bot_id(&self) -> UserId {
        self.bot
    }

    async fn can_attach_markers(&self, _channel: ChannelId) -> bool {
        self.can_attach
    }

    async fn send(
        &self,
        channel: ChannelId,
        surface: &Surface,
    ) -> Result<MessageHandle, TransportError> {
        if self.fail_send {
            return Err(TransportError::Other("send rejected".into()));
        }
        let handle = {
            let mut state = self.state.lock();
            let handle = MessageHandle::new(channel, MessageId(state.next_id));
            state.next_id += 1;
            state.sent.push((handle, surface.clone()));
            state.live.insert(handle, Vec::new());
            handle
        };
        self.sent_changed.notify_waiters();
        Ok(handle)
    }

    async fn add_marker(
        &self,
        message: MessageHandle,
        marker: &Marker,
    ) -> Result<(), TransportError> {
        let mut state = self.state.lock();
        let attempt = state.marker_attempts;
        state.marker_attempts += 1;
        if self.fail_marker_at.is_some_and(|at| attempt >= at) {
            return Err(TransportError::Other("reaction rejected".into()));
        }
        let markers = state
            .live
            .get_mut(&message)
            .ok_or(TransportError::UnknownMessage(message.id))?;
        markers.push(marker.clone());
        Ok(())
    }

    async fn delete(&self, message: MessageHandle) -> Result<(), TransportError> {
        let mut state = self.state.lock();
        state.delete_attempts += 1;
        if state.live.remove(&message).is_none() {
            return Err(TransportError::UnknownMessage(message.id));
        }
        state.deletes += 1;
        Ok(())
    }

    async fn wait_for_signal(&self, filter: SignalFilter, timeout: Duration) -> Option<Signal> {
        let wait = async {
            loop {
                let notified = self.signals_changed.notified();
                let found = self
                    .state
                    .lock()
                    .signals
                    .iter()
                    .find(|signal| filter.matches(signal))
                    .cloned();
                if let Some(signal) = found {
                    return signal;
                }
                notified.await;
            }
        };
        tokio::time::timeout(timeout, wait).await.ok()
    }
}

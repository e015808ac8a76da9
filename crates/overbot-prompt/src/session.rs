//! One prompt from render to cleanup.
//!
//! ```text
//! Constructed -> Rendered -> AwaitingSignal -> Resolved  -> CleanedUp
//!                                           -> Cancelled -> CleanedUp
//!                                           -> TimedOut  -> CleanedUp
//! ```
//!
//! Marker registration runs as a detached task next to the wait. A user
//! may react before every marker is attached; that reaction still counts
//! because the filter checks the configured marker set, not what is
//! already on the message.

use crate::context::PromptContext;
use crate::error::{PromptError, PromptResult};
use crate::marker::Marker;
use crate::prompt::Prompt;
use crate::surface::Surface;
use crate::transport::{MessageHandle, PromptTransport, SignalFilter};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, nothing rendered yet.
    Constructed,
    /// Surface built.
    Rendered,
    /// Message sent, waiting for a reaction.
    AwaitingSignal,
    /// A selectable marker was picked.
    Resolved,
    /// The cancel marker was picked.
    Cancelled,
    /// Nobody answered in time.
    TimedOut,
    /// Message deleted, or the delete was attempted.
    CleanedUp,
}

/// A single-use prompt run.
pub struct Session<'a, P: Prompt + ?Sized> {
    prompt: &'a P,
    ctx: &'a PromptContext,
    message: Option<MessageHandle>,
    body: Vec<String>,
    state: SessionState,
}

impl<'a, P: Prompt + ?Sized> Session<'a, P> {
    /// Creates a session for `prompt` in `ctx`.
    pub fn new(prompt: &'a P, ctx: &'a PromptContext) -> Self {
        Self {
            prompt,
            ctx,
            message: None,
            body: Vec::new(),
            state: SessionState::Constructed,
        }
    }

    /// The current lifecycle state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The rendered message, while it exists.
    pub const fn message(&self) -> Option<MessageHandle> {
        self.message
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = ?self.state, to = ?next, "Prompt session transition");
        self.state = next;
    }

    /// Builds the surface for the invoker and records the body lines.
    pub fn render_surface(&mut self) -> Surface {
        let surface = self
            .prompt
            .render_surface(&self.ctx.invoker, self.ctx.accent.as_ref());
        self.body = surface.description.lines().map(str::to_string).collect();
        self.transition(SessionState::Rendered);
        surface
    }

    /// Checks the reaction permission, then runs the prompt.
    ///
    /// # Errors
    ///
    /// See [`Prompt::start`].
    #[instrument(
        skip(self),
        fields(user = %self.ctx.invoker.id, channel = %self.ctx.channel)
    )]
    pub async fn start(mut self) -> PromptResult<P::Output> {
        if !self
            .ctx
            .transport
            .can_attach_markers(self.ctx.channel)
            .await
        {
            debug!("Cannot add reactions, prompt not shown");
            return Err(PromptError::CannotAttachMarkers);
        }
        self.run().await
    }

    /// Renders, sends, waits and cleans up.
    ///
    /// # Errors
    ///
    /// [`PromptError::NoSelection`] on timeout, [`PromptError::Transport`]
    /// when sending fails.
    pub async fn run(&mut self) -> PromptResult<P::Output> {
        let surface = self.render_surface();
        let message = self.ctx.transport.send(self.ctx.channel, &surface).await?;
        self.message = Some(message);

        let markers: Vec<Marker> = self.prompt.markers().markers().cloned().collect();
        tokio::spawn(register_markers(
            Arc::clone(&self.ctx.transport),
            message,
            markers.clone(),
        ));

        self.transition(SessionState::AwaitingSignal);
        let filter = SignalFilter {
            message: message.id,
            invoker: self.ctx.invoker.id,
            bot: self.ctx.transport.bot_id(),
            markers,
        };
        let signal = self
            .ctx
            .transport
            .wait_for_signal(filter, self.prompt.options().timeout)
            .await;

        let outcome = match signal {
            Some(signal) => {
                if self.prompt.markers().is_cancel(&signal.marker) {
                    self.transition(SessionState::Cancelled);
                } else {
                    self.transition(SessionState::Resolved);
                }
                self.prompt
                    .resolve(&signal.marker)
                    .ok_or(PromptError::NoSelection)
            }
            None => {
                self.transition(SessionState::TimedOut);
                Err(PromptError::NoSelection)
            }
        };

        self.cleanup().await;
        outcome
    }

    /// Deletes the rendered message, once.
    ///
    /// Returns whether the delete succeeded. Failures, including the
    /// message having been deleted by someone else, are logged and
    /// otherwise ignored.
    pub async fn cleanup(&mut self) -> bool {
        let Some(message) = self.message.take() else {
            return false;
        };

        let deleted = match self.ctx.transport.delete(message).await {
            Ok(()) => true,
            Err(e) => {
                debug!(message = %message.id, "Could not delete prompt: {}", e);
                false
            }
        };
        self.transition(SessionState::CleanedUp);
        deleted
    }
}

/// Attaches `markers` to `message` in order, stopping at the first failure.
///
/// Returns how many were attached.
pub async fn register_markers(
    transport: Arc<dyn PromptTransport>,
    message: MessageHandle,
    markers: Vec<Marker>,
) -> usize {
    let mut attached = 0;
    for marker in &markers {
        if let Err(e) = transport.add_marker(message, marker).await {
            debug!(
                message = %message.id,
                %marker,
                attached,
                "Stopped adding reactions: {}",
                e
            );
            break;
        }
        attached += 1;
    }
    attached
}

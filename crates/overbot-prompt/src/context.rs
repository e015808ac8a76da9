//! What a prompt needs to know about the invocation it runs in.

use crate::transport::PromptTransport;
use overbot_common::{ChannelId, UserId};
use std::fmt;
use std::sync::Arc;

/// Picks the embed accent colour for a user.
pub trait AccentColor: Send + Sync {
    /// The colour for `user`.
    fn color_for(&self, user: UserId) -> u32;
}

impl<F> AccentColor for F
where
    F: Fn(UserId) -> u32 + Send + Sync,
{
    fn color_for(&self, user: UserId) -> u32 {
        self(user)
    }
}

/// The same colour for everyone.
#[derive(Debug, Clone, Copy)]
pub struct FixedAccent(pub u32);

impl AccentColor for FixedAccent {
    fn color_for(&self, _user: UserId) -> u32 {
        self.0
    }
}

/// The user who invoked the command running the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    /// User ID.
    pub id: UserId,
    /// Name shown in the author header.
    pub name: String,
    /// Avatar shown in the author header.
    pub avatar_url: Option<String>,
}

impl Invoker {
    /// Creates an invoker.
    pub fn new(id: UserId, name: impl Into<String>, avatar_url: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_url,
        }
    }
}

/// Invocation context handed to [`Prompt::start`](crate::Prompt::start).
#[derive(Clone)]
pub struct PromptContext {
    /// Who the prompt answers to.
    pub invoker: Invoker,
    /// Where the prompt is shown.
    pub channel: ChannelId,
    /// How the prompt talks to Discord.
    pub transport: Arc<dyn PromptTransport>,
    /// Accent colour lookup.
    pub accent: Arc<dyn AccentColor>,
}

impl PromptContext {
    /// Creates a context.
    pub fn new(
        invoker: Invoker,
        channel: ChannelId,
        transport: Arc<dyn PromptTransport>,
        accent: Arc<dyn AccentColor>,
    ) -> Self {
        Self {
            invoker,
            channel,
            transport,
            accent,
        }
    }
}

impl fmt::Debug for PromptContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptContext")
            .field("invoker", &self.invoker)
            .field("channel", &self.channel)
            .field("bot", &self.transport.bot_id())
            .finish_non_exhaustive()
    }
}

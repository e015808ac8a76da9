//! [`PromptTransport`] backed by a serenity gateway context.

use crate::error::TransportError;
use crate::marker::Marker;
use crate::surface::Surface;
use crate::transport::{MessageHandle, PromptTransport, Signal, SignalFilter};
use async_trait::async_trait;
use overbot_common::{ChannelId, MessageId, UserId};
use ::serenity::all as serenity;
use std::time::Duration;
use tracing::{debug, trace};

/// Sends prompts through Discord.
///
/// Whether reactions may be added is decided by the caller, usually from
/// the permissions Discord attaches to the interaction.
#[derive(Clone)]
pub struct SerenityTransport {
    ctx: serenity::Context,
    bot_id: UserId,
    can_add_reactions: bool,
}

impl SerenityTransport {
    /// Creates a transport for the current gateway context.
    pub fn new(ctx: serenity::Context, can_add_reactions: bool) -> Self {
        let bot_id = UserId(ctx.cache.current_user().id.get());
        Self {
            ctx,
            bot_id,
            can_add_reactions,
        }
    }
}

impl std::fmt::Debug for SerenityTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerenityTransport")
            .field("bot_id", &self.bot_id)
            .field("can_add_reactions", &self.can_add_reactions)
            .finish_non_exhaustive()
    }
}

fn channel_id(id: ChannelId) -> serenity::ChannelId {
    serenity::ChannelId::new(id.get())
}

fn message_id(id: MessageId) -> serenity::MessageId {
    serenity::MessageId::new(id.get())
}

/// Converts a rendered surface into a Discord embed.
pub fn embed(surface: &Surface) -> serenity::CreateEmbed {
    let mut author = serenity::CreateEmbedAuthor::new(&surface.author.name);
    if let Some(icon) = &surface.author.icon_url {
        author = author.icon_url(icon);
    }

    let mut embed = serenity::CreateEmbed::new()
        .color(surface.color)
        .author(author)
        .description(&surface.description)
        .fields(
            surface
                .fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
        );
    if let Some(title) = &surface.title {
        embed = embed.title(title);
    }
    if let Some(image) = &surface.image {
        embed = embed.image(image);
    }
    if let Some(footer) = &surface.footer {
        embed = embed.footer(serenity::CreateEmbedFooter::new(footer));
    }
    embed
}

/// Converts a gateway reaction into a [`Signal`].
///
/// Returns `None` for reactions without a user, which Discord only sends
/// for some webhook-originated events.
pub fn signal_from(reaction: &serenity::Reaction) -> Option<Signal> {
    let user = reaction.user_id?;
    Some(Signal {
        message: MessageId(reaction.message_id.get()),
        marker: Marker::new(reaction.emoji.to_string()),
        user: UserId(user.get()),
    })
}

#[async_trait]
impl PromptTransport for SerenityTransport {
    fn bot_id(&self) -> UserId {
        self.bot_id
    }

    async fn can_attach_markers(&self, _channel: ChannelId) -> bool {
        self.can_add_reactions
    }

    async fn send(
        &self,
        channel: ChannelId,
        surface: &Surface,
    ) -> Result<MessageHandle, TransportError> {
        let message = channel_id(channel)
            .send_message(&self.ctx, serenity::CreateMessage::new().embed(embed(surface)))
            .await?;
        debug!(%channel, message = %message.id, "Prompt sent");
        Ok(MessageHandle::new(channel, MessageId(message.id.get())))
    }

    async fn add_marker(
        &self,
        message: MessageHandle,
        marker: &Marker,
    ) -> Result<(), TransportError> {
        let reaction = serenity::ReactionType::try_from(marker.as_str())
            .map_err(|e| TransportError::InvalidMarker(format!("{marker}: {e}")))?;
        channel_id(message.channel)
            .create_reaction(&self.ctx.http, message_id(message.id), reaction)
            .await?;
        Ok(())
    }

    async fn delete(&self, message: MessageHandle) -> Result<(), TransportError> {
        channel_id(message.channel)
            .delete_message(&self.ctx.http, message_id(message.id))
            .await?;
        Ok(())
    }

    async fn wait_for_signal(&self, filter: SignalFilter, timeout: Duration) -> Option<Signal> {
        let target = message_id(filter.message);
        let reaction = serenity::ReactionCollector::new(&self.ctx)
            .message_id(target)
            .timeout(timeout)
            .filter(move |reaction| {
                signal_from(reaction).is_some_and(|signal| filter.matches(&signal))
            })
            .next()
            .await?;

        trace!(message = %reaction.message_id, emoji = %reaction.emoji, "Prompt answered");
        signal_from(&reaction)
    }
}

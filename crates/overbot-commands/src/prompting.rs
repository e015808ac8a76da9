//! Glue between command invocations and reaction prompts.

use crate::framework::Context;
use overbot_common::{ChannelId, UserId};
use overbot_config::{Config, PromptsConfig};
use overbot_prompt::{
    AccentColor, Invoker, Marker, PlatformMarkers, PromptContext, SerenityTransport,
};
use std::sync::Arc;
use std::time::Duration;

/// Accent colour from the configuration: a per-user override, else the
/// bot's main colour.
#[derive(Debug, Clone)]
pub struct ConfigAccent {
    config: Arc<Config>,
}

impl ConfigAccent {
    /// Reads colours from `config`.
    pub const fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl AccentColor for ConfigAccent {
    fn color_for(&self, user: UserId) -> u32 {
        self.config
            .accent
            .color_for(user)
            .unwrap_or(self.config.bot.main_color)
    }
}

/// Colour of embeds shown to `user`, the same one their prompts use.
pub fn embed_color(config: &Arc<Config>, user: UserId) -> u32 {
    ConfigAccent::new(Arc::clone(config)).color_for(user)
}

/// The platform markers configured for prompts.
pub fn platform_markers(prompts: &PromptsConfig) -> PlatformMarkers {
    let markers = &prompts.platform_markers;
    PlatformMarkers {
        pc: Marker::new(&markers.pc),
        psn: Marker::new(&markers.psn),
        xbl: Marker::new(&markers.xbl),
        nintendo_switch: Marker::new(&markers.nintendo_switch),
        cancel: Marker::new(&markers.cancel),
    }
}

/// The configured prompt timeout.
pub const fn prompt_timeout(prompts: &PromptsConfig) -> Duration {
    Duration::from_secs(prompts.timeout_seconds)
}

/// Whether Discord lets the bot add reactions where `ctx` was invoked.
///
/// Interactions carry the bot's resolved channel permissions. When they
/// are missing the check is left to Discord.
fn can_add_reactions(ctx: Context<'_>) -> bool {
    match ctx {
        poise::Context::Application(app) => app
            .interaction
            .app_permissions
            .map_or(true, |permissions| permissions.add_reactions()),
        poise::Context::Prefix(_) => true,
    }
}

/// Builds the prompt context for the author of `ctx`.
pub fn prompt_context(ctx: Context<'_>) -> PromptContext {
    let author = ctx.author();
    let invoker = Invoker::new(
        UserId(author.id.get()),
        author.global_name.clone().unwrap_or_else(|| author.name.clone()),
        Some(author.face()),
    );
    let transport = SerenityTransport::new(ctx.serenity_context().clone(), can_add_reactions(ctx));

    PromptContext::new(
        invoker,
        ChannelId(ctx.channel_id().get()),
        Arc::new(transport),
        Arc::new(ConfigAccent::new(ctx.data().config.get())),
    )
}

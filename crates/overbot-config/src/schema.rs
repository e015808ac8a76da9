//! Configuration schema definitions using serde.
//!
//! Every section carries `#[serde(default)]` so a config file only needs
//! the keys it wants to change; the token is the one value without a
//! usable default.

use overbot_common::{GuildId, UserId};
use serde::{Deserialize, Serialize};

/// Main configuration structure for OverBot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord connection configuration.
    pub discord: DiscordConfig,
    /// General bot behaviour.
    pub bot: BotConfig,
    /// Public links shown by informational commands.
    pub links: LinksConfig,
    /// Reaction prompt configuration.
    pub prompts: PromptsConfig,
    /// Per-user accent colours.
    pub accent: AccentConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// When set, commands are registered to this guild only.
    pub debug_guild_id: Option<GuildId>,
    /// The bot owner, allowed to run maintenance commands.
    pub owner_id: Option<UserId>,
}

/// General bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Version string shown in `/about`.
    pub version: String,
    /// Language code for localization.
    pub language: String,
    /// Default embed accent colour.
    pub main_color: u32,
    /// Maximum number of profiles a user may link.
    pub profile_limit: usize,
}

/// Links configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Bot website.
    pub website: String,
    /// Support server invite.
    pub support: String,
    /// Bot invite URL.
    pub invite: String,
    /// Source repository.
    pub github_repo: String,
    /// Maintainer profile.
    pub github_profile: String,
}

/// Reaction prompt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Seconds a prompt waits for a reaction.
    pub timeout_seconds: u64,
    /// Emoji used as platform markers.
    pub platform_markers: PlatformMarkersConfig,
}

/// Emoji used by the platform prompts.
///
/// Custom emoji use Discord's `<:name:id>` mention syntax.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformMarkersConfig {
    /// PC (Battle.net).
    pub pc: String,
    /// PlayStation Network.
    pub psn: String,
    /// Xbox Live.
    pub xbl: String,
    /// Nintendo Switch.
    pub nintendo_switch: String,
    /// Cancel marker.
    pub cancel: String,
}

/// Accent colour configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccentConfig {
    /// Colours that replace `bot.main_color` for specific users.
    pub overrides: Vec<AccentOverride>,
}

/// A single user's accent colour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccentOverride {
    /// The user.
    pub user_id: UserId,
    /// Their colour.
    pub color: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Directory for daily-rolling log files.
    pub directory: Option<String>,
}

impl AccentConfig {
    /// Returns the override for `user`, if any.
    pub fn color_for(&self, user: UserId) -> Option<u32> {
        self.overrides
            .iter()
            .find(|entry| entry.user_id == user)
            .map(|entry| entry.color)
    }
}

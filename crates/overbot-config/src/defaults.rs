//! Default values for every configuration section.

use crate::schema::{
    BotConfig, DiscordConfig, LinksConfig, LoggingConfig, PlatformMarkersConfig, PromptsConfig,
};

/// Default accent colour, OverBot orange.
pub const DEFAULT_MAIN_COLOR: u32 = 0x00FA_9C1D;

/// Default prompt timeout in seconds.
pub const DEFAULT_PROMPT_TIMEOUT_SECONDS: u64 = 30;

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            debug_guild_id: None,
            owner_id: None,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            language: "en-US".to_string(),
            main_color: DEFAULT_MAIN_COLOR,
            profile_limit: 5,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            website: "https://overbot.netlify.app".to_string(),
            support: "https://discord.gg/8g3jnxv".to_string(),
            invite: "https://discord.com/oauth2/authorize?client_id=547546531666984961&scope=bot+applications.commands".to_string(),
            github_repo: "https://github.com/davidetacchini/overbot".to_string(),
            github_profile: "https://github.com/davidetacchini".to_string(),
        }
    }
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_PROMPT_TIMEOUT_SECONDS,
            platform_markers: PlatformMarkersConfig::default(),
        }
    }
}

impl Default for PlatformMarkersConfig {
    fn default() -> Self {
        Self {
            pc: "<:battlenet:679469162724196387>".to_string(),
            psn: "<:psn:679468542541693128>".to_string(),
            xbl: "<:xbl:679469487623503930>".to_string(),
            nintendo_switch: "<:nsw:752653766377078817>".to_string(),
            cancel: "❌".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "overbot=info,warn".to_string(),
            json: false,
            directory: None,
        }
    }
}

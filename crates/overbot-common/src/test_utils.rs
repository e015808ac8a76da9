//! Test utilities and shared test helpers for OverBot.
//!
//! This module provides common fixtures and helper functions that can be
//! used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test binary may have installed a subscriber already.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Discord-related test utilities.
pub mod discord_fixtures {
    use crate::{ChannelId, GuildId, UserId};

    /// The bot's own user ID in tests.
    pub fn bot_user_id() -> UserId {
        UserId(111_111_111_111_111_111)
    }

    /// Create a test channel ID.
    pub fn test_channel_id() -> ChannelId {
        ChannelId(123_456_789_012_345_678)
    }

    /// Create a test guild ID.
    pub fn test_guild_id() -> GuildId {
        GuildId(222_222_222_222_222_222)
    }

    /// Create a test user ID.
    pub fn test_user_id() -> UserId {
        UserId(987_654_321_098_765_432)
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration as TOML.
    pub fn minimal_config_toml() -> &'static str {
        r#"
[discord]
token = "test_token"
"#
    }

    /// A configuration exercising every section as TOML.
    pub fn full_config_toml() -> &'static str {
        r##"
[discord]
token = "test_token_full"
debug_guild_id = 222222222222222222
owner_id = 987654321098765432

[bot]
version = "9.9.9"
language = "it-IT"
main_color = 0xFA9C1D
profile_limit = 3

[links]
website = "https://overbot.example"
support = "https://discord.gg/example"
invite = "https://discord.com/oauth2/authorize?client_id=1"
github_repo = "https://github.com/example/overbot"
github_profile = "https://github.com/example"

[prompts]
timeout_seconds = 45

[prompts.platform_markers]
pc = "<:battlenet:1>"
psn = "<:psn:2>"
xbl = "<:xbl:3>"
nintendo_switch = "<:nsw:4>"
cancel = "❌"

[[accent.overrides]]
user_id = 987654321098765432
color = 0x00FF00

[logging]
level = "debug"
json = true
"##
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::UserId;
    use proptest::prelude::*;

    /// Strategy for generating valid Discord user IDs.
    pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
        (100_000_000_000_000_000u64..=999_999_999_999_999_999u64).prop_map(UserId)
    }

    /// Strategy for generating titles of arbitrary length, including ones
    /// well past Discord's embed title limit.
    pub fn title_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(any::<char>(), 0..600).prop_map(|chars| chars.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_bot_and_user_ids_are_distinct() {
        assert_ne!(discord_fixtures::bot_user_id(), discord_fixtures::test_user_id());
    }
}

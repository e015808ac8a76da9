//! Runtime validation of loaded configurations.

use crate::schema::Config;
use overbot_common::{OverBotError, Result};

/// Largest `bot.profile_limit`. Profile choices are keyed by keycap markers
/// 1 through 9.
pub const MAX_PROFILE_LIMIT: usize = 9;

impl Config {
    /// Validates the configuration, reporting the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.discord.token.trim().is_empty() {
            return Err(OverBotError::config("Discord token cannot be empty"));
        }

        if self.prompts.timeout_seconds == 0 {
            return Err(OverBotError::config(
                "Prompt timeout must be at least one second",
            ));
        }

        if self.bot.profile_limit == 0 {
            return Err(OverBotError::config("Profile limit must be positive"));
        }
        if self.bot.profile_limit > MAX_PROFILE_LIMIT {
            return Err(OverBotError::config(format!(
                "Profile limit cannot exceed {MAX_PROFILE_LIMIT}"
            )));
        }

        let markers = &self.prompts.platform_markers;
        let all = [
            &markers.pc,
            &markers.psn,
            &markers.xbl,
            &markers.nintendo_switch,
            &markers.cancel,
        ];
        if all.iter().any(|marker| marker.trim().is_empty()) {
            return Err(OverBotError::config("Platform markers cannot be empty"));
        }
        for (index, marker) in all.iter().enumerate() {
            if all[index + 1..].contains(marker) {
                return Err(OverBotError::config(format!(
                    "Platform marker {marker} is used more than once"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        let mut config = Config::default();
        config.discord.token = "token".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_profile_limit_bounded_by_keycaps() {
        let mut config = valid();
        config.bot.profile_limit = MAX_PROFILE_LIMIT;
        assert!(config.validate().is_ok());

        config.bot.profile_limit = MAX_PROFILE_LIMIT + 1;
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("cannot exceed 9"));

        config.bot.profile_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid();
        config.prompts.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_marker_rejected() {
        let mut config = valid();
        config.prompts.platform_markers.xbl = config.prompts.platform_markers.psn.clone();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("more than once"));
    }
}

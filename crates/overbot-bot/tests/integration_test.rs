//! Integration tests for overbot-bot.

use overbot_bot::{build_filter, init_logging, BotError, OverBot};
use overbot_common::test_utils::config_fixtures;
use overbot_config::{ConfigLoader, LoggingConfig};

#[tokio::test]
async fn test_bot_builds_from_loaded_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, config_fixtures::full_config_toml()).unwrap();

    let loader = ConfigLoader::new(&path);
    let config = loader.load().await.unwrap();
    assert!(config.discord.debug_guild_id.is_some());

    let _bot = OverBot::new(config, loader);
}

#[tokio::test]
async fn test_invalid_configuration_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[prompts]\ntimeout_seconds = 0\n").unwrap();

    let error = ConfigLoader::new(&path).load().await.unwrap_err();
    let error = BotError::from(error);
    assert!(error.to_string().starts_with("Configuration error"));
}

#[test]
fn test_file_logging_returns_guard() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        level: "overbot=debug".to_string(),
        json: true,
        directory: Some(dir.path().display().to_string()),
    };

    let guard = init_logging(&config).unwrap();
    assert!(guard.is_some());
    tracing::info!("logging initialised");

    // A second global subscriber is refused.
    assert!(matches!(init_logging(&config), Err(BotError::Logging(_))));
}

#[test]
fn test_configured_level_used_without_rust_log() {
    assert!(build_filter(None, "overbot=info,warn").is_ok());
}

//! Main entry point for OverBot.

use overbot_bot::{init_logging, BotResult, OverBot};
use overbot_config::ConfigLoader;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> BotResult<()> {
    let loader = ConfigLoader::from_env();
    let config = loader.load().await?;
    // `load` ran before any subscriber existed.
    let _log_guard = init_logging(&config.logging)?;
    if !loader.file_exists() {
        warn!(
            path = %loader.path().display(),
            "Configuration file not found, running on defaults"
        );
    }

    info!(
        version = %config.bot.version,
        config = %loader.path().display(),
        "Starting OverBot"
    );

    let bot = OverBot::new(config, loader);
    if let Err(e) = bot.start().await {
        error!("Bot stopped with an error: {}", e);
        return Err(e);
    }

    Ok(())
}

//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use overbot_commands::{create_framework, Data};
use overbot_config::{Config, ConfigCache, ConfigLoader};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{info, warn};

/// Main bot structure.
pub struct OverBot {
    config: Arc<ConfigCache>,
    loader: ConfigLoader,
}

impl OverBot {
    /// Creates a new bot instance.
    pub fn new(config: Config, loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(ConfigCache::new(config)),
            loader,
        }
    }

    /// Gateway events the bot needs: guilds for the cache, reactions for
    /// prompts.
    pub fn intents() -> serenity::GatewayIntents {
        serenity::GatewayIntents::GUILDS
            | serenity::GatewayIntents::GUILD_MESSAGE_REACTIONS
            | serenity::GatewayIntents::DIRECT_MESSAGE_REACTIONS
    }

    /// Connects to Discord and runs until shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be built or the gateway
    /// connection fails.
    pub async fn start(self) -> BotResult<()> {
        let config = self.config.get();
        let cache = Arc::clone(&self.config);
        let loader = self.loader;
        let debug_guild = config.discord.debug_guild_id;

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");
                    let commands = &framework.options().commands;
                    match debug_guild {
                        Some(guild) => {
                            let guild = serenity::GuildId::new(guild.get());
                            poise::builtins::register_in_guild(ctx, commands, guild).await?;
                            info!(%guild, "Registered commands in debug guild");
                        }
                        None => {
                            poise::builtins::register_globally(ctx, commands).await?;
                            info!("Registered commands globally");
                        }
                    }
                    Ok(Data::new(cache, loader))
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&config.discord.token, Self::intents())
            .framework(framework)
            .await?;

        let shard_manager = Arc::clone(&client.shard_manager);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutting down");
                    shard_manager.shutdown_all().await;
                }
                Err(e) => warn!("Could not listen for shutdown signal: {}", e),
            }
        });

        client.start().await?;
        Ok(())
    }
}

//! Poise framework setup, shared data and error reporting.

use crate::error::{classify, ErrorResponse};
use crate::profiles::ProfileStore;
use crate::usage::UsageTracker;
use chrono::Utc;
use overbot_common::GuildId;
use overbot_config::{ConfigCache, ConfigLoader};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Live configuration, swapped on `/reload`.
    pub config: Arc<ConfigCache>,
    /// Where the configuration is reloaded from.
    pub loader: ConfigLoader,
    /// Command usage counters.
    pub usage: UsageTracker,
    /// Linked game profiles.
    pub profiles: ProfileStore,
    /// When the bot started.
    pub started_at: Instant,
}

impl Data {
    /// Creates the shared data for a freshly started bot.
    pub fn new(config: Arc<ConfigCache>, loader: ConfigLoader) -> Self {
        Self {
            config,
            loader,
            usage: UsageTracker::new(),
            profiles: ProfileStore::new(),
            started_at: Instant::now(),
        }
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot registers.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    let mut commands = vec![
        crate::meta::help(),
        crate::meta::support(),
        crate::meta::ping(),
        crate::meta::about(),
        crate::meta::topweekly(),
        crate::meta::reload(),
        crate::profile::profile(),
    ];
    qualify(&mut commands, None);
    commands
}

/// Prefixes subcommand names with their parents, e.g. `profile link`.
fn qualify(commands: &mut [poise::Command<Data, Error>], parent: Option<&str>) {
    for command in commands {
        command.qualified_name = match parent {
            Some(parent) => format!("{parent} {}", command.name),
            None => command.name.clone(),
        };
        let name = command.qualified_name.clone();
        qualify(&mut command.subcommands, Some(&name));
    }
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(),
        pre_command: |ctx| Box::pin(async move { record_usage(ctx) }),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    })
}

/// Days of per-guild usage kept for `/topweekly`.
const USAGE_RETENTION_DAYS: i64 = 8;

fn record_usage(ctx: Context<'_>) {
    let command = &ctx.command().qualified_name;
    debug!(command = %command, user = %ctx.author().id, "Running command");
    let now = Utc::now();
    let usage = &ctx.data().usage;
    usage.record(ctx.guild_id().map(|guild| GuildId(guild.get())), now);
    usage.prune(now, USAGE_RETENTION_DAYS);
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => report(ctx, &error).await,
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

async fn report(ctx: Context<'_>, error: &Error) {
    let language = ctx.data().config.get().bot.language.clone();
    match classify(error.as_ref(), &language) {
        ErrorResponse::Silent => dismiss(ctx).await,
        ErrorResponse::Notice(text) => reply_ephemeral(ctx, text).await,
        ErrorResponse::Internal(text) => {
            error!(
                command = %ctx.command().qualified_name,
                "Command failed: {}",
                error
            );
            reply_ephemeral(ctx, text).await;
        }
    }
}

/// Removes the deferred "thinking" response of a prompt nobody answered.
async fn dismiss(ctx: Context<'_>) {
    if let poise::Context::Application(app) = ctx {
        if let Err(e) = app.interaction.delete_response(ctx.http()).await {
            debug!("Could not remove deferred response: {}", e);
        }
    }
}

async fn reply_ephemeral(ctx: Context<'_>, text: String) {
    let reply = poise::CreateReply::default().content(text).ephemeral(true);
    if let Err(e) = ctx.send(reply).await {
        warn!("Could not report command error: {}", e);
    }
}

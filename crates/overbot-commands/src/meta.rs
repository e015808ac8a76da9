//! Informational and maintenance commands.

use crate::error::CommandError;
use crate::framework::{Context, Data, Error};
use crate::prompting::embed_color;
use chrono::Utc;
use overbot_common::{format_uptime, GuildId, UserId};
use overbot_config::Config;
use overbot_i18n::Messages;
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

type Command = poise::Command<Data, Error>;

/// Per-user cooldown on `/about` and `/topweekly`.
pub const META_COOLDOWN: Duration = Duration::from_secs(60);

/// Discord shows at most this many autocomplete choices.
const MAX_SUGGESTIONS: usize = 25;

fn accent(ctx: Context<'_>, config: &Arc<Config>) -> u32 {
    embed_color(config, UserId(ctx.author().id.get()))
}

/// Commands shown in help: leaves of the tree, hidden ones skipped.
pub fn visible_commands(commands: &[Command]) -> Vec<&Command> {
    let mut visible = Vec::new();
    for command in commands.iter().filter(|c| !c.hide_in_help) {
        if command.subcommands.is_empty() {
            visible.push(command);
        } else {
            visible.extend(visible_commands(&command.subcommands));
        }
    }
    visible
}

/// Finds a command by its qualified name, with or without a leading `/`.
pub fn find_command<'a>(commands: &'a [Command], query: &str) -> Option<&'a Command> {
    let query = query
        .trim_start_matches('/')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let mut found = None;
    let mut level = commands;
    for word in query.split(' ') {
        let command = level.iter().find(|c| c.name.eq_ignore_ascii_case(word))?;
        found = Some(command);
        level = &command.subcommands;
    }
    found.filter(|c| !c.hide_in_help)
}

/// `/name <required> [optional]`.
pub fn signature(command: &Command) -> String {
    let mut signature = format!("/{}", command.qualified_name);
    for parameter in &command.parameters {
        if parameter.required {
            signature.push_str(&format!(" <{}>", parameter.name));
        } else {
            signature.push_str(&format!(" [{}]", parameter.name));
        }
    }
    signature
}

/// One line per visible command: `` `/name` - description ``.
pub fn command_index(commands: &[Command]) -> Vec<String> {
    visible_commands(commands)
        .into_iter()
        .map(|command| {
            format!(
                "`/{}` - {}",
                command.qualified_name,
                command.description.as_deref().unwrap_or_default()
            )
        })
        .collect()
}

/// Qualified names of visible commands starting with `partial`.
pub fn command_suggestions(commands: &[Command], partial: &str) -> Vec<String> {
    let partial = partial.trim_start_matches('/').trim().to_lowercase();
    visible_commands(commands)
        .into_iter()
        .map(|command| command.qualified_name.clone())
        .filter(|name| name.starts_with(&partial))
        .take(MAX_SUGGESTIONS)
        .collect()
}

async fn autocomplete_command(ctx: Context<'_>, partial: &str) -> Vec<String> {
    command_suggestions(&ctx.framework().options().commands, partial)
}

/// One line per parameter: `` `name` [R] - description ``.
pub fn parameter_lines(command: &Command) -> Vec<String> {
    command
        .parameters
        .iter()
        .map(|parameter| {
            format!(
                "`{}` {} - {}",
                parameter.name,
                if parameter.required { "[R]" } else { "[O]" },
                parameter.description.as_deref().unwrap_or_default()
            )
        })
        .collect()
}

/// Shows every command, or details about one.
#[poise::command(slash_command)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to get information about"]
    #[autocomplete = "autocomplete_command"]
    command: Option<String>,
) -> Result<(), Error> {
    let config = ctx.data().config.get();
    let language = &config.bot.language;
    let commands = &ctx.framework().options().commands;

    let embed = match command {
        None => serenity::CreateEmbed::new()
            .title(Messages::get("help-title", language))
            .description(Messages::get("help-description", language))
            .field(
                Messages::get("help-commands", language),
                command_index(commands).join("\n"),
                false,
            ),
        Some(query) => {
            let Some(command) = find_command(commands, &query) else {
                let text =
                    Messages::get_with_args("help-not-found", language, &[("command", query.as_str())]);
                ctx.send(CreateReply::default().content(text).ephemeral(true))
                    .await?;
                return Ok(());
            };
            let mut embed = serenity::CreateEmbed::new()
                .title(signature(command))
                .description(command.description.clone().unwrap_or_default());
            let parameters = parameter_lines(command);
            if !parameters.is_empty() {
                embed = embed
                    .field(
                        Messages::get("help-parameters", language),
                        parameters.join("\n"),
                        false,
                    )
                    .footer(serenity::CreateEmbedFooter::new(Messages::get(
                        "help-legend",
                        language,
                    )));
            }
            embed
        }
    };

    ctx.send(CreateReply::default().embed(embed.color(accent(ctx, &config))))
        .await?;
    Ok(())
}

/// Returns the official bot support server invite.
#[poise::command(slash_command)]
pub async fn support(ctx: Context<'_>) -> Result<(), Error> {
    let config = ctx.data().config.get();
    let text = Messages::get_with_args(
        "support-message",
        &config.bot.language,
        &[("link", config.links.support.as_str())],
    );
    ctx.say(text).await?;
    Ok(())
}

/// Shows bot's latency.
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let language = ctx.data().config.get().bot.language.clone();
    let title = Messages::get("ping-title", &language);
    let latency = ctx.ping().await;

    let started = Instant::now();
    let reply = ctx.say(&title).await?;
    let ack = started.elapsed();

    let content = format!(
        "{title}\n{}: {}ms\n{}: {}ms",
        Messages::get("ping-latency", &language),
        latency.as_millis(),
        Messages::get("ping-ack", &language),
        ack.as_millis()
    );
    reply
        .edit(ctx, CreateReply::default().content(content))
        .await?;
    Ok(())
}

/// Shows bot information.
#[poise::command(slash_command, guild_only, user_cooldown = 60)]
pub async fn about(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let config = data.config.get();
    let language = &config.bot.language;
    let links = &config.links;

    let embed = serenity::CreateEmbed::new()
        .color(accent(ctx, &config))
        .title(Messages::get("about-title", language))
        .url(&links.website)
        .field(Messages::get("about-version", language), &config.bot.version, true)
        .field(
            Messages::get("about-servers", language),
            ctx.serenity_context().cache.guild_count().to_string(),
            true,
        )
        .field(
            Messages::get("about-commands", language),
            data.usage.total().to_string(),
            true,
        )
        .field(
            Messages::get("about-uptime", language),
            format_uptime(data.started_at.elapsed(), true),
            true,
        )
        .field(
            Messages::get("about-links", language),
            format!(
                "[Website]({}) • [Support]({}) • [Invite]({}) • [GitHub]({})",
                links.website, links.support, links.invite, links.github_repo
            ),
            false,
        );

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Lines for the weekly leaderboard.
pub fn weekly_lines(
    top: &[(GuildId, u64)],
    guild_name: impl Fn(GuildId) -> String,
    language: &str,
) -> Vec<String> {
    top.iter()
        .enumerate()
        .map(|(index, (guild, commands))| {
            Messages::get_with_args(
                "topweekly-line",
                language,
                &[
                    ("index", (index + 1).to_string().as_str()),
                    ("guild", guild_name(*guild).as_str()),
                    ("commands", commands.to_string().as_str()),
                ],
            )
        })
        .collect()
}

/// Shows the most active servers of the week.
#[poise::command(slash_command, user_cooldown = 60)]
pub async fn topweekly(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let config = data.config.get();
    let language = &config.bot.language;

    let top = data.usage.top_guilds(Utc::now(), 7, 5);
    let cache = &ctx.serenity_context().cache;
    let lines = weekly_lines(
        &top,
        |guild| {
            cache
                .guild(serenity::GuildId::new(guild.get()))
                .map_or_else(|| guild.to_string(), |g| g.name.clone())
        },
        language,
    );
    let description = if lines.is_empty() {
        Messages::get("topweekly-empty", language)
    } else {
        lines.join("\n")
    };

    let embed = serenity::CreateEmbed::new()
        .color(accent(ctx, &config))
        .title(Messages::get("topweekly-title", language))
        .description(description)
        .footer(serenity::CreateEmbedFooter::new(Messages::get(
            "topweekly-footer",
            language,
        )));
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Whether `user` is the configured bot owner.
pub fn is_owner(config: &Config, user: UserId) -> bool {
    config.discord.owner_id == Some(user)
}

/// Reloads the configuration file.
#[poise::command(slash_command, hide_in_help)]
pub async fn reload(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    if !is_owner(&data.config.get(), UserId(ctx.author().id.get())) {
        return Err(CommandError::NotOwner.into());
    }

    let config = data.loader.load().await?;
    let language = config.bot.language.clone();
    data.config.update(config);
    info!(path = %data.loader.path().display(), "Configuration reloaded");

    ctx.send(
        CreateReply::default()
            .content(Messages::get("reload-done", &language))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

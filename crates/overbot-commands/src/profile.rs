//! `/profile` commands: link, update, unlink and list game profiles.

use crate::framework::{Context, Error};
use crate::profiles::{Profile, ProfileStore};
use crate::prompting::{embed_color, platform_markers, prompt_context, prompt_timeout};
use overbot_common::UserId;
use overbot_config::Config;
use overbot_i18n::Messages;
use overbot_prompt::{
    ChoicePrompt, LinkPrompt, Prompt, PromptContext, PromptOptions, UpdatePrompt,
};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use std::fmt;
use tracing::info;

/// A profile offered in the choice prompt, keeping its position in the
/// user's list so identical profiles stay distinguishable.
#[derive(Debug, Clone)]
struct ProfileChoice {
    index: usize,
    profile: Profile,
}

impl fmt::Display for ProfileChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.profile, f)
    }
}

/// Asks which profile to act on. A single profile is picked without asking.
pub async fn choose_profile(
    pctx: &PromptContext,
    profiles: &[Profile],
    config: &Config,
) -> Result<usize, Error> {
    if profiles.len() == 1 {
        return Ok(0);
    }

    let language = &config.bot.language;
    let options = PromptOptions::default()
        .with_title(Messages::get("prompt-choose-profile-title", language))
        .with_footer(Messages::get("prompt-choose-profile-footer", language))
        .with_timeout(prompt_timeout(&config.prompts));
    let entries = profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| ProfileChoice {
            index,
            profile: profile.clone(),
        })
        .collect();
    let chosen = ChoicePrompt::new(entries, options).start(pctx).await?;
    Ok(chosen.index)
}

/// Asks for a platform and links `username` on it.
///
/// Returns `None` when the invoker cancels.
pub async fn link_profile(
    pctx: &PromptContext,
    store: &ProfileStore,
    config: &Config,
    username: &str,
) -> Result<Option<Profile>, Error> {
    let user = pctx.invoker.id;
    let limit = config.bot.profile_limit;
    store.ensure_room(user, limit)?;

    let prompt = LinkPrompt::new(&platform_markers(&config.prompts), &config.bot.language)
        .with_timeout(prompt_timeout(&config.prompts));
    let Some(platform) = prompt.start(pctx).await? else {
        return Ok(None);
    };

    let profile = Profile::new(platform, username);
    store.link(user, profile.clone(), limit)?;
    info!(%user, platform = platform.as_str(), "Profile linked");
    Ok(Some(profile))
}

/// Asks which profile to replace and its new platform, then stores
/// `username` on it.
///
/// Returns `None` when the invoker cancels.
pub async fn update_profile(
    pctx: &PromptContext,
    store: &ProfileStore,
    config: &Config,
    username: &str,
) -> Result<Option<Profile>, Error> {
    let user = pctx.invoker.id;
    let profiles = store.require(user)?;
    let index = choose_profile(pctx, &profiles, config).await?;
    let current = &profiles[index];

    let prompt = UpdatePrompt::new(
        current.platform,
        &current.username,
        &platform_markers(&config.prompts),
        &config.bot.language,
    )
    .with_timeout(prompt_timeout(&config.prompts));
    let Some(platform) = prompt.start(pctx).await? else {
        return Ok(None);
    };

    let profile = Profile::new(platform, username);
    store.replace(user, index, profile.clone())?;
    info!(%user, platform = platform.as_str(), "Profile updated");
    Ok(Some(profile))
}

/// Asks which profile to remove and removes it.
pub async fn unlink_profile(
    pctx: &PromptContext,
    store: &ProfileStore,
    config: &Config,
) -> Result<Profile, Error> {
    let user = pctx.invoker.id;
    let profiles = store.require(user)?;
    let index = choose_profile(pctx, &profiles, config).await?;
    let removed = store.unlink(user, index)?;
    info!(%user, platform = removed.platform.as_str(), "Profile unlinked");
    Ok(removed)
}

/// `1. Xbox - name` for each profile.
pub fn profile_lines(profiles: &[Profile]) -> Vec<String> {
    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| format!("{}. {profile}", index + 1))
        .collect()
}

/// Manage your Overwatch profiles.
#[poise::command(
    slash_command,
    subcommands("link", "update", "unlink", "list"),
    subcommand_required
)]
pub async fn profile(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Link an Overwatch profile.
#[poise::command(slash_command)]
pub async fn link(
    ctx: Context<'_>,
    #[description = "Your username on that platform"] username: String,
) -> Result<(), Error> {
    ctx.defer_ephemeral().await?;
    let config = ctx.data().config.get();
    let pctx = prompt_context(ctx);

    let key = match link_profile(&pctx, &ctx.data().profiles, &config, &username).await? {
        Some(_) => "profile-linked",
        None => "prompt-cancelled",
    };
    ctx.say(Messages::get(key, &config.bot.language)).await?;
    Ok(())
}

/// Update a linked Overwatch profile.
#[poise::command(slash_command)]
pub async fn update(
    ctx: Context<'_>,
    #[description = "Your new username on that platform"] username: String,
) -> Result<(), Error> {
    ctx.defer_ephemeral().await?;
    let config = ctx.data().config.get();
    let pctx = prompt_context(ctx);

    let key = match update_profile(&pctx, &ctx.data().profiles, &config, &username).await? {
        Some(_) => "profile-updated",
        None => "prompt-cancelled",
    };
    ctx.say(Messages::get(key, &config.bot.language)).await?;
    Ok(())
}

/// Unlink an Overwatch profile.
#[poise::command(slash_command)]
pub async fn unlink(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer_ephemeral().await?;
    let config = ctx.data().config.get();
    let pctx = prompt_context(ctx);

    unlink_profile(&pctx, &ctx.data().profiles, &config).await?;
    ctx.say(Messages::get("profile-unlinked", &config.bot.language))
        .await?;
    Ok(())
}

/// List your linked Overwatch profiles.
#[poise::command(slash_command)]
pub async fn list(ctx: Context<'_>) -> Result<(), Error> {
    let config = ctx.data().config.get();
    let language = &config.bot.language;
    let user = UserId(ctx.author().id.get());
    let profiles = ctx.data().profiles.require(user)?;

    let footer = Messages::get_with_args(
        "profile-list-footer",
        language,
        &[
            ("count", profiles.len().to_string().as_str()),
            ("limit", config.bot.profile_limit.to_string().as_str()),
        ],
    );
    let embed = serenity::CreateEmbed::new()
        .color(embed_color(&config, user))
        .title(Messages::get("profile-list-title", language))
        .description(profile_lines(&profiles).join("\n"))
        .footer(serenity::CreateEmbedFooter::new(footer));
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] overbot_common::OverBotError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// Logging could not be set up.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

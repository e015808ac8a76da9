//! Prompt error types.

/// Errors surfaced to callers of [`Prompt::start`](crate::Prompt::start).
#[derive(thiserror::Error, Debug)]
pub enum PromptError {
    /// The timeout elapsed without a valid reaction.
    #[error("No selection was made in time")]
    NoSelection,

    /// The bot may not add reactions in the invoking channel.
    #[error("Missing permission to add reactions in this channel")]
    CannotAttachMarkers,

    /// Sending the prompt failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors raised by a [`PromptTransport`](crate::PromptTransport).
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// Discord rejected the request or could not be reached.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// A marker could not be turned into a Discord reaction.
    #[error("Invalid marker: {0}")]
    InvalidMarker(String),

    /// The message no longer exists.
    #[error("Unknown message {0}")]
    UnknownMessage(overbot_common::MessageId),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

/// Result type for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

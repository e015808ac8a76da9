//! Common type definitions and newtype wrappers for Discord snowflakes.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! snowflake {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            /// Returns the raw snowflake value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

snowflake!(
    /// A Discord user ID.
    UserId
);

snowflake!(
    /// A Discord channel ID.
    ChannelId
);

snowflake!(
    /// A Discord guild ID.
    GuildId
);

snowflake!(
    /// A Discord message ID.
    MessageId
);

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, OverBotError>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum OverBotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Localization error.
    #[error("Localization error: {0}")]
    Localization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl OverBotError {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

//! # OverBot Commands
//!
//! Discord slash commands for OverBot, built on the Poise framework.
//!
//! Profile commands drive the reaction prompts from `overbot-prompt`;
//! the rest are informational. Usage counters and linked profiles are
//! kept in memory in the shared [`Data`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod framework;
pub mod meta;
pub mod profile;
pub mod profiles;
pub mod prompting;
pub mod usage;

pub use error::{classify, CommandError, ErrorResponse};
pub use framework::*;
pub use profiles::{Profile, ProfileStore};
pub use prompting::{embed_color, platform_markers, prompt_context, prompt_timeout, ConfigAccent};
pub use usage::UsageTracker;

//! # OverBot Prompt
//!
//! Reaction-driven prompts: render an embed, attach a set of emoji markers,
//! wait for the invoking user to pick one, then delete the message.
//!
//! Three prompts are provided:
//!
//! - [`LinkPrompt`] asks for a gaming platform, or cancel.
//! - [`UpdatePrompt`] does the same while showing the profile being replaced.
//! - [`ChoicePrompt`] numbers a list of entries and returns the chosen one.
//!
//! All of them run the same session lifecycle (see [`session`]) against a
//! [`PromptTransport`], which is implemented for serenity by
//! [`SerenityTransport`] and, for tests, by `testing::FakeTransport`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod choice;
pub mod context;
pub mod discord;
pub mod error;
pub mod link;
pub mod marker;
pub mod prompt;
pub mod session;
pub mod surface;
pub mod transport;
pub mod update;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod tests;

pub use choice::ChoicePrompt;
pub use context::{AccentColor, FixedAccent, Invoker, PromptContext};
pub use discord::SerenityTransport;
pub use error::{PromptError, PromptResult, TransportError};
pub use link::{LinkPrompt, Platform, PlatformMarkers};
pub use marker::{Marker, MarkerSet};
pub use prompt::{Prompt, PromptOptions, DEFAULT_TIMEOUT};
pub use session::{Session, SessionState};
pub use surface::{Surface, SurfaceAuthor, SurfaceField, MAX_TITLE_LEN};
pub use transport::{MessageHandle, PromptTransport, Signal, SignalFilter};
pub use update::UpdatePrompt;

//! # OverBot I18n
//!
//! Localization support using the Fluent system.
//!
//! Translations are embedded at compile time. Lookups fall back to
//! `en-US` and finally to the message key itself, so a missing string
//! degrades the text shown to users but never fails a command.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod messages;

pub use loader::*;
pub use messages::*;

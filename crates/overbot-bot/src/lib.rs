//! # OverBot
//!
//! Overwatch Discord bot with reaction-driven prompts.
//!
//! This is the main binary crate: it sets up logging, loads the
//! configuration, connects to Discord through Poise and shuts down on
//! Ctrl-C.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod logging;

pub use bot::*;
pub use error::*;
pub use logging::*;

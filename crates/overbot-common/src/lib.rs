//! # OverBot Common
//!
//! Shared identifiers, error types and utilities for OverBot.
//!
//! This crate provides the foundational types used across all other crates
//! in the OverBot workspace. It deliberately has no Discord dependency so
//! that the prompt and configuration layers can be tested in isolation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
pub use utils::*;

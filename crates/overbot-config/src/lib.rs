//! # OverBot Config
//!
//! Type-safe configuration management for OverBot.
//!
//! This crate provides TOML loading with environment overrides, validation,
//! and a lock-free cache that lets the running bot swap configurations
//! atomically.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;

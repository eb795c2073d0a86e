//! # fanyi-core
//!
//! Core types, traits, configuration, and error handling for the fanyi bot.

pub mod config;
pub mod error;
pub mod intent;
pub mod language;
pub mod message;
pub mod traits;
pub mod trim;

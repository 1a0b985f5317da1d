//! # Wordgames Config
//!
//! Configuration management for Wordgames.
//! Supports layered configuration from TOML files and environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;

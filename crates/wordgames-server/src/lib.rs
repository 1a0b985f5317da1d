//! # Wordgames Server Library
//!
//! Wiring for the `wordgames` binary: command-line parsing, Shaku modules
//! for each persistence backend, logging setup and the serve/migrate/info
//! commands.

pub mod app;
pub mod cli;
pub mod di;
pub mod logging;
pub mod migrate;
pub mod startup;

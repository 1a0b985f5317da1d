//! # Wordgames REST
//!
//! HTTP endpoints for widgets and words, plus health checks.
//! Every handler runs its DAO work through one transaction.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;

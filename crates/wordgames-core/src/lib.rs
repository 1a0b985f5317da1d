//! # Wordgames Core
//!
//! Core types, entities, and error definitions shared by every layer of
//! the Wordgames service: the persistence layer, the REST layer, and the
//! server bootstrap.

pub mod entities;
pub mod error;
pub mod id;
pub mod prefix;
pub mod result;

pub use entities::*;
pub use error::*;
pub use id::*;
pub use prefix::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};

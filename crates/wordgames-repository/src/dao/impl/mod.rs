//! DAO implementations, one module per backend.

pub mod memory;
pub mod postgres;

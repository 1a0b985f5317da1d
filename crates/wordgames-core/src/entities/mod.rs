//! Persisted entities.

pub mod widget;
pub mod word;

pub use widget::*;
pub use word::*;

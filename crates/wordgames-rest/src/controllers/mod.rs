//! REST API controllers.

pub mod health_controller;
pub mod widget_controller;
pub mod word_controller;

pub use health_controller::*;

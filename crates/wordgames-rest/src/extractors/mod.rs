//! Custom Axum extractors.
//!
//! Both turn Axum's plain-text rejections into [`AppError`](crate::responses::AppError)
//! so a malformed request gets the same JSON error body as any other failure.

mod id_path;
mod json_body;

pub use id_path::*;
pub use json_body::*;

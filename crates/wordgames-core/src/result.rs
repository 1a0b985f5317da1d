//! Result type aliases for Wordgames.

use crate::WordgamesError;

/// A specialized `Result` type for Wordgames operations.
pub type WordgamesResult<T> = Result<T, WordgamesError>;

//! Typed ID wrappers for entities.
//!
//! Ids are assigned by the storage backend (a PostgreSQL `serial` column or
//! the in-memory counter) and are never constructed from thin air by
//! callers other than when parsing a request.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

macro_rules! int_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Wraps a raw backend id.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the raw id.
            #[must_use]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

int_id! {
    /// A strongly-typed wrapper for widget IDs.
    WidgetId
}

int_id! {
    /// A strongly-typed wrapper for word IDs.
    WordId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse() {
        assert_eq!("17".parse::<WidgetId>().unwrap(), WidgetId::new(17));
        assert!("seventeen".parse::<WordId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&WordId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn test_id_ordering_follows_inner_value() {
        assert!(WidgetId::new(1) < WidgetId::new(2));
    }
}

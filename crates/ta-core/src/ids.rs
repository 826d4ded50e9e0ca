//! Strongly typed identifier wrappers.
//!
//! Identifiers in this domain come from external configuration and the
//! remote API as opaque strings (`"1"`, `"T-204"`), so the wrappers hold a
//! `String` rather than an integer index.  They are `Ord + Hash` so they can
//! be used as map keys and sorted without ceremony.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around an owned string.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

typed_id! {
    /// Identifier of one timetable entry.  Unique within a day.
    pub struct EntryId;
}

typed_id! {
    /// Identifier assigned to a teacher by the remote service.
    pub struct TeacherId;
}

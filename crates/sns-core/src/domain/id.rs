//! Store-assigned identifiers.
//!
//! Each entity gets its own newtype so a post id can never be compared against a user id.
//! Ownership checks compare these keys, never names or other mutable fields.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`User`](super::User).
    UserId
);
entity_id!(
    /// Identifier of a [`Post`](super::Post).
    PostId
);
entity_id!(
    /// Identifier of a [`Comment`](super::Comment).
    CommentId
);
entity_id!(
    /// Identifier of a [`Like`](super::Like).
    LikeId
);

//! Opaque identifiers. Each registry hands out its own id type so a `PaperId` can never be
//! passed where a `PersonId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident => $entity:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Entity name this id belongs to.
            pub const ENTITY: &'static str = $entity;

            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifies a conference.
    ConferenceId => crate::constants::CONFERENCE
);
entity_id!(
    /// Identifies one calendar day of a conference.
    DayId => crate::constants::DAY
);
entity_id!(
    /// Identifies a session within a day.
    SessionId => crate::constants::SESSION
);
entity_id!(
    /// Identifies a person in the global person registry.
    PersonId => crate::constants::PERSON
);
entity_id!(
    /// Identifies a paper in the global paper registry.
    PaperId => crate::constants::PAPER
);

//! Kernel utilities shared across slices.
//! Keep this crate lightweight: id generation, config loading and the ports slices use to
//! reach each other's data.
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use podium_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! Or mint a typed id directly:
//! ```rust
//! use podium_kernel::domain::ids::DayId;
//!
//! let id: DayId = podium_kernel::new_id();
//! assert!(id.as_str().starts_with("day:"));
//! ```
pub mod config;
pub mod directory;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use nanoid::nanoid;
pub use podium_domain as domain;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}

/// Types that can be minted by [`new_id`].
pub trait EntityId: From<String> {
    const PREFIX: &'static str;
}

macro_rules! entity_ids {
    ($($ty:ty),* $(,)?) => {
        $(impl EntityId for $ty {
            const PREFIX: &'static str = <$ty>::ENTITY;
        })*
    };
}

entity_ids!(
    domain::ids::ConferenceId,
    domain::ids::DayId,
    domain::ids::SessionId,
    domain::ids::PersonId,
    domain::ids::PaperId,
);

/// Mints a fresh `<entity>:<nanoid>` id.
#[must_use]
pub fn new_id<I: EntityId>() -> I {
    I::from(format!("{}:{}", I::PREFIX, safe_nanoid!()))
}

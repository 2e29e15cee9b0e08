//! Entity names and shared display strings.

pub const CONFERENCE: &str = "conference";
pub const DAY: &str = "day";
pub const SESSION: &str = "session";
pub const PERSON: &str = "person";
pub const PAPER: &str = "paper";

/// Display name used when a person cannot be resolved.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Title given to break sessions created without one.
pub const BREAK_TITLE: &str = "Break";

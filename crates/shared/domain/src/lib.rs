//! # Domain Models
//!
//! Plain data for conferences, days, sessions, persons and papers, plus the configuration
//! tree and the feature slice registry. Dependencies stay at `serde`, `chrono` and
//! `typed-builder`: no I/O and no scheduling rules live here.

pub mod config;
pub mod constants;
pub mod ids;
pub mod people;
pub mod registry;
pub mod schedule;

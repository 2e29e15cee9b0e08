use chrono::NaiveTime;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by every slice.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PodiumConfigInner {
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

/// Arc-wrapped config, cheap to clone into slices.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct PodiumConfig {
    #[serde(flatten)]
    inner: Arc<PodiumConfigInner>,
}

impl Deref for PodiumConfig {
    type Target = PodiumConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PodiumConfig {
    fn deref_mut(&mut self) -> &mut PodiumConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Scheduling defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Local start of a generated conference day.
    pub day_start: NaiveTime,
    /// Local end of a generated conference day.
    pub day_end: NaiveTime,
    /// Offset of the conference's local time from UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// Also report a person presenting one session while chairing an overlapping one.
    pub cross_role_conflicts: bool,
}

/// Subscriber settings consumed by the applications.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::MIN + chrono::TimeDelta::hours(9),
            day_end: NaiveTime::MIN + chrono::TimeDelta::hours(17),
            utc_offset_minutes: 0,
            cross_role_conflicts: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}

//! # Scheduling
//!
//! Session conflict detection, chronological ordering and conference day generation.
//!
//! The free functions in [`conflict`], [`ordering`] and [`days`] take every setting as a
//! parameter. The [`Scheduling`] slice binds the configured working hours, conflict policy and
//! conference UTC offset so callers do not have to thread them through.
//!
//! ```rust
//! use podium_domain::config::PodiumConfig;
//! use podium_scheduling::{ConflictPolicy, Scheduling};
//!
//! let mut config = PodiumConfig::default();
//! config.schedule.cross_role_conflicts = true;
//!
//! let scheduling = Scheduling::from_config(&config).unwrap();
//! assert_eq!(scheduling.policy(), ConflictPolicy::CrossRole);
//! ```

pub mod conflict;
pub mod days;
mod error;
pub mod ordering;
pub mod policy;

pub use conflict::{
    ConflictEntry, ConflictPolicy, ConflictReport, Role, find_conflicts, find_conflicts_excluding,
    find_conflicts_with, location_clashes, overlapping_sessions,
};
pub use days::{
    DayGeneration, DayRepository, InMemoryDayRepository, WorkingHours, generate_conference_days,
    generate_days,
};
pub use error::{SchedulingError, SchedulingErrorExt};
pub use ordering::{ordered_sessions, reorder_day, sort_sessions};
pub use policy::SessionPolicy;

use chrono::{FixedOffset, NaiveDate};
use podium_domain::config::PodiumConfig;
use podium_domain::schedule::{Conference, Day, Session};
use podium_kernel::directory::PersonDirectory;
use podium_kernel::domain::registry::InitializedSlice;

/// Scheduling feature state.
#[podium_derive::podium_slice]
pub struct Scheduling {
    hours: WorkingHours,
    policy: ConflictPolicy,
    offset: FixedOffset,
}

impl Scheduling {
    /// Builds the slice from `[schedule]` settings.
    ///
    /// # Errors
    /// * [`SchedulingError::InvalidTimeWindow`] if the day does not start before it ends.
    /// * [`SchedulingError::Internal`] if the UTC offset is outside ±24h.
    pub fn from_config(config: &PodiumConfig) -> Result<Self, SchedulingError> {
        let schedule = &config.schedule;
        let hours =
            WorkingHours::try_from(schedule).context("Reading schedule.day_start/day_end")?;

        let minutes = schedule.utc_offset_minutes;
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| format!("UTC offset of {minutes} minutes is out of range"))?;
        let policy = ConflictPolicy::from_cross_role(schedule.cross_role_conflicts);

        Ok(Self::new(SchedulingInner { hours, policy, offset }))
    }

    #[must_use]
    pub fn hours(&self) -> WorkingHours {
        self.hours
    }

    #[must_use]
    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// [`find_conflicts_with`] under the configured policy.
    pub fn find_conflicts<'a, I, D>(
        &self,
        existing: I,
        candidate: &Session,
        directory: &D,
    ) -> Result<ConflictReport, SchedulingError>
    where
        I: IntoIterator<Item = &'a Session>,
        D: PersonDirectory + ?Sized,
    {
        find_conflicts_with(existing, candidate, directory, self.policy)
    }

    /// [`find_conflicts_excluding`] under the configured policy.
    pub fn find_conflicts_excluding<'a, I, D>(
        &self,
        existing: I,
        candidate: &Session,
        directory: &D,
    ) -> Result<ConflictReport, SchedulingError>
    where
        I: IntoIterator<Item = &'a Session>,
        D: PersonDirectory + ?Sized,
    {
        find_conflicts_excluding(existing, candidate, directory, self.policy)
    }

    /// Days for the local dates `start..=end` with the configured hours and offset.
    pub fn generate_days(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Day>, SchedulingError> {
        generate_days(start, end, self.hours, &self.offset)
    }

    pub async fn generate_conference_days<R>(
        &self,
        repo: &R,
        conference: &Conference,
    ) -> Result<DayGeneration, SchedulingError>
    where
        R: DayRepository + ?Sized,
    {
        generate_conference_days(repo, conference, self.hours, &self.offset).await
    }
}

/// Initialize the scheduling feature.
///
/// # Errors
/// See [`Scheduling::from_config`].
pub fn init(config: &PodiumConfig) -> Result<InitializedSlice, SchedulingError> {
    let slice = Scheduling::from_config(config)?;

    tracing::info!(
        day_start = %slice.hours.start(),
        day_end = %slice.hours.end(),
        offset = %slice.offset,
        policy = ?slice.policy,
        "Scheduling slice initialized"
    );

    Ok(InitializedSlice::new(slice))
}

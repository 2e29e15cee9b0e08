//! # Conference day generation
//!
//! Turns a conference's date span into one [`Day`] per calendar date, each carrying the
//! configured working hours. Dates are local to the conference time zone; the stored windows
//! are UTC.
//!
//! [`generate_conference_days`] runs at most once per conference: when the repository already
//! holds days it reports [`DayGeneration::Skipped`] and writes nothing. The check and the
//! writes are separate calls, so two concurrent generations may both write.

use crate::error::SchedulingError;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use podium_domain::config::ScheduleConfig;
use podium_domain::ids::{ConferenceId, DayId};
use podium_domain::schedule::{Conference, Day, TimeWindow};
use podium_kernel::new_id;
use std::future::Future;
use tracing::{debug, info};

/// Local start and end of a conference day. Always `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkingHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, SchedulingError> {
        if start >= end {
            return Err(SchedulingError::InvalidTimeWindow {
                message: format!("working hours start {start} is not before end {end}").into(),
                context: None,
            });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        let defaults = ScheduleConfig::default();
        Self { start: defaults.day_start, end: defaults.day_end }
    }
}

impl TryFrom<&ScheduleConfig> for WorkingHours {
    type Error = SchedulingError;

    fn try_from(config: &ScheduleConfig) -> Result<Self, Self::Error> {
        Self::new(config.day_start, config.day_end)
    }
}

/// Outcome of [`generate_conference_days`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayGeneration {
    Created(Vec<Day>),
    /// The conference already had days; nothing was written.
    Skipped,
}

/// Storage for generated days, keyed by conference.
pub trait DayRepository: Send + Sync {
    fn has_days(
        &self,
        conference: &ConferenceId,
    ) -> impl Future<Output = Result<bool, SchedulingError>> + Send;

    fn insert_day(
        &self,
        conference: &ConferenceId,
        day: Day,
    ) -> impl Future<Output = Result<(), SchedulingError>> + Send;

    /// Days of `conference` ordered by date.
    fn days(
        &self,
        conference: &ConferenceId,
    ) -> impl Future<Output = Result<Vec<Day>, SchedulingError>> + Send;
}

/// Process-local [`DayRepository`].
#[derive(Debug, Default)]
pub struct InMemoryDayRepository {
    days: RwLock<FxHashMap<ConferenceId, Vec<Day>>>,
}

impl InMemoryDayRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DayRepository for InMemoryDayRepository {
    async fn has_days(&self, conference: &ConferenceId) -> Result<bool, SchedulingError> {
        Ok(self.days.read().get(conference).is_some_and(|days| !days.is_empty()))
    }

    async fn insert_day(&self, conference: &ConferenceId, day: Day) -> Result<(), SchedulingError> {
        let mut guard = self.days.write();
        let days = guard.entry(conference.clone()).or_default();
        if days.iter().any(|d| d.date == day.date) {
            return Err(SchedulingError::Repository {
                message: format!("day {} already exists", day.date).into(),
                context: Some(format!("conference {conference}").into()),
            });
        }
        let at = days.partition_point(|d| d.date < day.date);
        days.insert(at, day);
        Ok(())
    }

    async fn days(&self, conference: &ConferenceId) -> Result<Vec<Day>, SchedulingError> {
        Ok(self.days.read().get(conference).cloned().unwrap_or_default())
    }
}

/// One day per date in `start_date..=end_date`, each spanning `hours` in `tz`.
///
/// # Errors
/// * [`SchedulingError::InvalidDateRange`] if `start_date > end_date`, or if a working-hours
///   boundary does not exist on some date in `tz` (a daylight-saving gap).
///
/// # Example
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use podium_scheduling::days::{generate_days, WorkingHours};
///
/// let date = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
/// let days = generate_days(date(1), date(3), WorkingHours::default(), &Utc).unwrap();
/// assert_eq!(days.len(), 3);
/// ```
pub fn generate_days<Tz: TimeZone>(
    start_date: NaiveDate,
    end_date: NaiveDate,
    hours: WorkingHours,
    tz: &Tz,
) -> Result<Vec<Day>, SchedulingError> {
    if start_date > end_date {
        return Err(SchedulingError::InvalidDateRange {
            message: format!("start {start_date} is after end {end_date}").into(),
            context: None,
        });
    }

    start_date
        .iter_days()
        .take_while(|date| *date <= end_date)
        .map(|date| -> Result<Day, SchedulingError> {
            let start = local_instant(date, hours.start, tz)?;
            let end = local_instant(date, hours.end, tz)?;
            Ok(Day::new(new_id::<DayId>(), date, TimeWindow::new(start, end)))
        })
        .collect()
}

/// Creates the conference's days unless it already has some.
///
/// The date span is the conference's start and end instants seen in `tz`.
///
/// # Errors
/// Everything [`generate_days`] returns, plus [`SchedulingError::Repository`] from `repo`.
pub async fn generate_conference_days<R, Tz>(
    repo: &R,
    conference: &Conference,
    hours: WorkingHours,
    tz: &Tz,
) -> Result<DayGeneration, SchedulingError>
where
    R: DayRepository + ?Sized,
    Tz: TimeZone,
{
    if repo.has_days(&conference.id).await? {
        debug!(conference = %conference.id, "Days already generated, skipping");
        return Ok(DayGeneration::Skipped);
    }

    let start = conference.start.with_timezone(tz).date_naive();
    let end = conference.end.with_timezone(tz).date_naive();
    let days = generate_days(start, end, hours, tz)?;

    for day in &days {
        repo.insert_day(&conference.id, day.clone()).await?;
    }

    info!(conference = %conference.id, days = days.len(), %start, %end, "Generated conference days");
    Ok(DayGeneration::Created(days))
}

fn local_instant<Tz: TimeZone>(
    date: NaiveDate,
    time: NaiveTime,
    tz: &Tz,
) -> Result<DateTime<Utc>, SchedulingError> {
    // Ambiguous wall-clock times (a DST fold) resolve to the earlier instant.
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| SchedulingError::InvalidDateRange {
            message: format!("{date} {time} does not exist in the conference time zone").into(),
            context: None,
        })
}

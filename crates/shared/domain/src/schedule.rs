use crate::constants::BREAK_TITLE;
use crate::ids::{ConferenceId, DayId, PaperId, PersonId, SessionId};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use typed_builder::TypedBuilder;

/// A span of time `[start, end)`.
///
/// Construction does not check `start < end`: form state can be half-edited, so callers
/// validate with [`TimeWindow::is_valid`] before relying on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(rename = "startTime")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endTime")]
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Half-open overlap: windows that only touch at a boundary do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// A scheduled activity within a conference day.
///
/// `presenters`, `chair_persons` and `papers` keep the order the organiser picked them in
/// and are treated as sets by the scheduling rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[builder(setter(into))]
    pub id: SessionId,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub title: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub description: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub location: String,
    /// Missing while the start or end time has not been filled in.
    #[builder(default, setter(strip_option))]
    #[serde(flatten, deserialize_with = "partial_window")]
    pub window: Option<TimeWindow>,
    #[builder(default)]
    #[serde(default)]
    pub is_break: bool,
    #[builder(default)]
    #[serde(default)]
    pub presenters: Vec<PersonId>,
    #[builder(default)]
    #[serde(default)]
    pub chair_persons: Vec<PersonId>,
    #[builder(default)]
    #[serde(default)]
    pub papers: Vec<PaperId>,
}

impl Session {
    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.window.map(|w| w.start)
    }

    /// Title for listings; untitled breaks read as [`BREAK_TITLE`].
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.is_break && self.title.trim().is_empty() { BREAK_TITLE } else { &self.title }
    }

    /// Ordering key: by start time, sessions without a window last.
    #[must_use]
    pub fn sort_key(&self) -> (bool, Option<DateTime<Utc>>) {
        (self.window.is_none(), self.start())
    }
}

/// `startTime`/`endTime` as they arrive from a form: either may be absent or null.
#[derive(Deserialize)]
struct PartialWindow {
    #[serde(rename = "startTime", default)]
    start: Option<DateTime<Utc>>,
    #[serde(rename = "endTime", default)]
    end: Option<DateTime<Utc>>,
}

// A plain flattened `Option` turns a malformed timestamp into `None`; going through a
// struct keeps the parse error.
fn partial_window<'de, D>(deserializer: D) -> Result<Option<TimeWindow>, D::Error>
where
    D: Deserializer<'de>,
{
    let PartialWindow { start, end } = PartialWindow::deserialize(deserializer)?;
    Ok(start.zip(end).map(|(start, end)| TimeWindow::new(start, end)))
}

/// One calendar date of a conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub id: DayId,
    pub date: NaiveDate,
    /// Working hours of the day.
    pub window: TimeWindow,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Day {
    #[must_use]
    pub const fn new(id: DayId, date: NaiveDate, window: TimeWindow) -> Self {
        Self { id, date, window, sessions: Vec::new() }
    }

    /// Inserts after every session that starts at or before `session`, keeping
    /// `sessions` ordered by start time with ties in insertion order.
    pub fn insert_session(&mut self, session: Session) {
        let key = session.sort_key();
        let at = self.sessions.partition_point(|s| s.sort_key() <= key);
        self.sessions.insert(at, session);
    }
}

/// A conference and its overall date span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    #[builder(setter(into))]
    pub id: ConferenceId,
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub description: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    pub location: String,
    #[serde(rename = "startDate")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endDate")]
    pub end: DateTime<Utc>,
}

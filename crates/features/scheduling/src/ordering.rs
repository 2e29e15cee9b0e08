//! Chronological ordering of a day's sessions.

use podium_domain::schedule::{Day, Session};
use tracing::trace;

/// Sorts in place by start time.
///
/// The sort is stable: sessions with equal starts keep their relative order. Sessions still
/// missing a window go last.
pub fn sort_sessions(sessions: &mut [Session]) {
    sessions.sort_by_key(Session::sort_key);
}

/// Collects `sessions` into a new, sorted `Vec`.
#[must_use]
pub fn ordered_sessions<I>(sessions: I) -> Vec<Session>
where
    I: IntoIterator<Item = Session>,
{
    let mut sorted: Vec<_> = sessions.into_iter().collect();
    sort_sessions(&mut sorted);
    sorted
}

/// Re-sorts a day's sessions, e.g. after one of them was rescheduled.
pub fn reorder_day(day: &mut Day) {
    trace!(day = %day.id, sessions = day.sessions.len(), "Reordering day");
    sort_sessions(&mut day.sessions);
}

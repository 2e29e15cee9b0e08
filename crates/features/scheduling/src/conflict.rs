//! # Conflict detection
//!
//! Answers one question for a proposed or edited session: who is double-booked?
//!
//! ## Rules
//!
//! 1. The candidate must have a window and `start < end`, otherwise the check fails with
//!    [`SchedulingError::InvalidSession`] or [`SchedulingError::InvalidTimeWindow`].
//! 2. Break sessions opt out entirely: a break candidate yields an empty report and existing
//!    breaks are never compared against.
//! 3. Windows overlap when `candidate.start < existing.end && candidate.end > existing.start`.
//!    Touching windows (`10:00–11:00` then `11:00–12:00`) do not overlap.
//! 4. For every overlapping session, a person found in the same role in both sessions is a
//!    conflict. Under [`ConflictPolicy::CrossRole`] a presenter chairing the other session
//!    (and the reverse) counts too, filed under the role held in the candidate.
//! 5. Each person is reported once per role, in discovery order: existing sessions in the
//!    order given, then the candidate's participant order.
//! 6. Names come from a [`PersonDirectory`]; unknown ids and lookup failures render as
//!    [`UNKNOWN_NAME`].
//!
//! The detector is pure: it never mutates or stores its inputs. Sessions without a window
//! cannot overlap anything and are skipped.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use podium_domain::ids::PersonId;
//! use podium_domain::people::Person;
//! use podium_domain::schedule::{Session, TimeWindow};
//! use podium_scheduling::conflict::find_conflicts;
//!
//! let at = |h| Utc.with_ymd_and_hms(2024, 3, 1, h, 0, 0).unwrap();
//! let ada = PersonId::from("person:ada");
//! let people = vec![Person::builder().id(ada.clone()).name("Ada Lovelace").build()];
//!
//! let keynote = Session::builder()
//!     .id("session:keynote")
//!     .window(TimeWindow::new(at(9), at(11)))
//!     .presenters(vec![ada.clone()])
//!     .build();
//! let workshop = Session::builder()
//!     .id("session:workshop")
//!     .window(TimeWindow::new(at(10), at(12)))
//!     .presenters(vec![ada.clone()])
//!     .build();
//!
//! let report = find_conflicts(&[keynote], &workshop, &people).unwrap();
//! assert_eq!(report.conflicting_presenters[0].name, "Ada Lovelace");
//! assert!(report.conflicting_chair_persons.is_empty());
//! ```

use crate::error::SchedulingError;
use fxhash::FxHashSet;
use podium_domain::constants::UNKNOWN_NAME;
use podium_domain::ids::{PersonId, SessionId};
use podium_domain::schedule::{Session, TimeWindow};
use podium_kernel::directory::PersonDirectory;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Which role pairs count as a double booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Presenter vs presenter and chair vs chair only.
    #[default]
    SameRole,
    /// Additionally presenter vs chair in either direction.
    CrossRole,
}

impl ConflictPolicy {
    #[must_use]
    pub const fn from_cross_role(cross_role: bool) -> Self {
        if cross_role { Self::CrossRole } else { Self::SameRole }
    }
}

/// Role a person holds in the candidate session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Presenter,
    ChairPerson,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Presenter => "presenter",
            Self::ChairPerson => "chairperson",
        })
    }
}

/// A double-booked person with the name to show for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub id: PersonId,
    pub name: String,
}

/// Result of a conflict check.
///
/// Both lists are always present; empty lists mean "checked, nothing found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub conflicting_presenters: Vec<ConflictEntry>,
    pub conflicting_chair_persons: Vec<ConflictEntry>,
}

impl ConflictReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conflicting_presenters.is_empty() && self.conflicting_chair_persons.is_empty()
    }

    /// Conflicting entries across both roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conflicting_presenters.len() + self.conflicting_chair_persons.len()
    }

    #[must_use]
    pub fn contains(&self, role: Role, id: &PersonId) -> bool {
        self.entries(role).iter().any(|entry| &entry.id == id)
    }

    #[must_use]
    pub fn entries(&self, role: Role) -> &[ConflictEntry] {
        match role {
            Role::Presenter => &self.conflicting_presenters,
            Role::ChairPerson => &self.conflicting_chair_persons,
        }
    }
}

/// Checks `candidate` against `existing` with [`ConflictPolicy::SameRole`].
///
/// When editing, leave the candidate's stored version out of `existing` or use
/// [`find_conflicts_excluding`]; otherwise the session conflicts with itself.
///
/// # Errors
/// * [`SchedulingError::InvalidSession`] if the candidate has no time window.
/// * [`SchedulingError::InvalidTimeWindow`] if the candidate's start is not before its end.
pub fn find_conflicts<'a, I, D>(
    existing: I,
    candidate: &Session,
    directory: &D,
) -> Result<ConflictReport, SchedulingError>
where
    I: IntoIterator<Item = &'a Session>,
    D: PersonDirectory + ?Sized,
{
    find_conflicts_with(existing, candidate, directory, ConflictPolicy::SameRole)
}

/// [`find_conflicts`] with an explicit policy.
///
/// # Errors
/// Same as [`find_conflicts`].
pub fn find_conflicts_with<'a, I, D>(
    existing: I,
    candidate: &Session,
    directory: &D,
    policy: ConflictPolicy,
) -> Result<ConflictReport, SchedulingError>
where
    I: IntoIterator<Item = &'a Session>,
    D: PersonDirectory + ?Sized,
{
    let window = checked_window(candidate)?;
    if candidate.is_break {
        debug!(candidate = %candidate.id, "Break session, skipping conflict check");
        return Ok(ConflictReport::default());
    }

    let mut presenters = Booked::default();
    let mut chairs = Booked::default();
    let mut compared = 0_usize;

    for other in overlapping(existing, window) {
        compared += 1;
        presenters.add_shared(&candidate.presenters, &other.presenters);
        chairs.add_shared(&candidate.chair_persons, &other.chair_persons);

        if policy == ConflictPolicy::CrossRole {
            presenters.add_shared(&candidate.presenters, &other.chair_persons);
            chairs.add_shared(&candidate.chair_persons, &other.presenters);
        }
    }

    let report = ConflictReport {
        conflicting_presenters: presenters.resolve(directory, Role::Presenter),
        conflicting_chair_persons: chairs.resolve(directory, Role::ChairPerson),
    };

    debug!(
        candidate = %candidate.id,
        ?policy,
        overlapping = compared,
        presenters = report.conflicting_presenters.len(),
        chairs = report.conflicting_chair_persons.len(),
        "Conflict check finished"
    );

    Ok(report)
}

/// Edit flow: ignores any existing session that shares the candidate's id.
///
/// # Errors
/// Same as [`find_conflicts`].
pub fn find_conflicts_excluding<'a, I, D>(
    existing: I,
    candidate: &Session,
    directory: &D,
    policy: ConflictPolicy,
) -> Result<ConflictReport, SchedulingError>
where
    I: IntoIterator<Item = &'a Session>,
    D: PersonDirectory + ?Sized,
{
    let others = existing.into_iter().filter(|s| s.id != candidate.id);
    find_conflicts_with(others, candidate, directory, policy)
}

/// Ids of the non-break sessions whose windows overlap the candidate's.
///
/// A break candidate overlaps nothing.
///
/// # Errors
/// Same validation as [`find_conflicts`].
pub fn overlapping_sessions<'a, I>(
    existing: I,
    candidate: &Session,
) -> Result<Vec<SessionId>, SchedulingError>
where
    I: IntoIterator<Item = &'a Session>,
{
    let window = checked_window(candidate)?;
    if candidate.is_break {
        return Ok(Vec::new());
    }
    Ok(overlapping(existing, window).map(|s| s.id.clone()).collect())
}

/// Ids of overlapping non-break sessions booked into the candidate's location.
///
/// Locations compare trimmed and case-insensitively; a blank location never clashes.
///
/// # Errors
/// Same validation as [`find_conflicts`].
pub fn location_clashes<'a, I>(
    existing: I,
    candidate: &Session,
) -> Result<Vec<SessionId>, SchedulingError>
where
    I: IntoIterator<Item = &'a Session>,
{
    let window = checked_window(candidate)?;
    let Some(room) = normalized_location(&candidate.location) else {
        return Ok(Vec::new());
    };
    if candidate.is_break {
        return Ok(Vec::new());
    }

    Ok(overlapping(existing, window)
        .filter(|s| normalized_location(&s.location).as_deref() == Some(room.as_str()))
        .map(|s| s.id.clone())
        .collect())
}

pub(crate) fn checked_window(session: &Session) -> Result<TimeWindow, SchedulingError> {
    let Some(window) = session.window else {
        return Err(SchedulingError::InvalidSession {
            message: "start and end time are required".into(),
            context: Some(format!("session {}", session.id).into()),
        });
    };
    if !window.is_valid() {
        return Err(SchedulingError::InvalidTimeWindow {
            message: format!("start {} is not before end {}", window.start, window.end).into(),
            context: Some(format!("session {}", session.id).into()),
        });
    }
    Ok(window)
}

fn overlapping<'a, I>(existing: I, window: TimeWindow) -> impl Iterator<Item = &'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    existing
        .into_iter()
        .filter(|s| !s.is_break)
        .filter(move |s| s.window.is_some_and(|w| window.overlaps(&w)))
}

fn normalized_location(location: &str) -> Option<String> {
    let trimmed = location.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Double-booked ids for one role, deduplicated in discovery order.
#[derive(Debug, Default)]
struct Booked<'a> {
    seen: FxHashSet<&'a PersonId>,
    ordered: Vec<&'a PersonId>,
}

impl<'a> Booked<'a> {
    fn add_shared(&mut self, ours: &'a [PersonId], theirs: &[PersonId]) {
        for id in ours {
            if theirs.contains(id) && self.seen.insert(id) {
                self.ordered.push(id);
            }
        }
    }

    fn resolve<D: PersonDirectory + ?Sized>(self, directory: &D, role: Role) -> Vec<ConflictEntry> {
        self.ordered
            .into_iter()
            .map(|id| ConflictEntry { id: id.clone(), name: display_name(directory, id, role) })
            .collect()
    }
}

fn display_name<D: PersonDirectory + ?Sized>(directory: &D, id: &PersonId, role: Role) -> String {
    match directory.person_name(id) {
        Ok(Some(name)) if !name.trim().is_empty() => name,
        Ok(_) => {
            warn!(person = %id, %role, "No display name for conflicting person");
            UNKNOWN_NAME.to_owned()
        },
        Err(err) => {
            warn!(person = %id, %role, error = %err, "Person name lookup failed");
            UNKNOWN_NAME.to_owned()
        },
    }
}

use super::{print_json, read_json};
use anyhow::{Context, Result};
use podium::domain::ids::SessionId;
use podium::domain::people::Person;
use podium::domain::schedule::Session;
use podium::features::registry::Registries;
use podium::features::scheduling::{
    ConflictPolicy, ConflictReport, Scheduling, find_conflicts_with, location_clashes,
    overlapping_sessions,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Input of `podium check`: the day as stored plus the session being saved.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snapshot {
    #[serde(default)]
    pub(crate) persons: Vec<Person>,
    #[serde(default)]
    pub(crate) sessions: Vec<Session>,
    pub(crate) candidate: Session,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckOutput {
    #[serde(flatten)]
    pub(crate) report: ConflictReport,
    pub(crate) overlapping_sessions: Vec<SessionId>,
    pub(crate) location_clashes: Vec<SessionId>,
}

pub(crate) fn run_check(
    scheduling: &Scheduling,
    registries: &Registries,
    path: &Path,
    exclude_self: bool,
    cross_role: bool,
) -> Result<()> {
    let snapshot: Snapshot = read_json(path)?;
    let Snapshot { persons, sessions, candidate } = snapshot;

    for person in persons {
        let id = person.id.clone();
        registries.persons.upsert(person).with_context(|| format!("Loading person {id}"))?;
    }

    let policy = if cross_role { ConflictPolicy::CrossRole } else { scheduling.policy() };
    let existing: Vec<&Session> =
        sessions.iter().filter(|s| !exclude_self || s.id != candidate.id).collect();

    let directory = &*registries.persons;
    let report = find_conflicts_with(existing.iter().copied(), &candidate, directory, policy)?;
    let output = CheckOutput {
        overlapping_sessions: overlapping_sessions(existing.iter().copied(), &candidate)?,
        location_clashes: location_clashes(existing.iter().copied(), &candidate)?,
        report,
    };

    if output.report.is_empty() && output.location_clashes.is_empty() {
        info!(candidate = %candidate.id, "No conflicts");
    } else {
        warn!(
            candidate = %candidate.id,
            people = output.report.len(),
            rooms = output.location_clashes.len(),
            "Candidate session has conflicts"
        );
    }

    print_json(&output)
}

use super::{print_json, read_json};
use anyhow::Result;
use chrono::FixedOffset;
use podium::domain::schedule::Session;
use podium::features::scheduling::{Scheduling, ordered_sessions};
use std::path::Path;

pub(crate) fn run_order(scheduling: &Scheduling, path: &Path, plain: bool) -> Result<()> {
    let sessions: Vec<Session> = read_json(path)?;
    let ordered = ordered_sessions(sessions);

    if !plain {
        return print_json(&ordered);
    }

    let offset = scheduling.offset();
    for session in &ordered {
        println!("{}", plain_line(session, &offset));
    }
    Ok(())
}

/// `09:00-10:30  Opening keynote  @ Main Hall` in conference local time, with `--:--` for
/// undated sessions.
fn plain_line(session: &Session, offset: &FixedOffset) -> String {
    let local = |at: chrono::DateTime<chrono::Utc>| at.with_timezone(offset).format("%H:%M");
    let when = session
        .window
        .map_or_else(|| "--:--".to_owned(), |w| format!("{}-{}", local(w.start), local(w.end)));
    let title = session.display_title();
    match session.location.trim() {
        "" => format!("{when}  {title}"),
        room => format!("{when}  {title}  @ {room}"),
    }
}

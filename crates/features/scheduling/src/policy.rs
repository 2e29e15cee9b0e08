use crate::conflict::checked_window;
use crate::error::SchedulingError;
use podium_domain::schedule::Session;

/// Checks a session must pass before it can be saved.
///
/// Conflict detection only validates the time window; participant requirements live here so
/// the detector can run on half-filled forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionPolicy;

impl SessionPolicy {
    /// # Errors
    /// * [`SchedulingError::InvalidSession`] if the window is missing, or a non-break session
    ///   has no presenter or no chairperson.
    /// * [`SchedulingError::InvalidTimeWindow`] if start is not before end.
    pub fn check(session: &Session) -> Result<(), SchedulingError> {
        checked_window(session)?;
        if session.is_break {
            return Ok(());
        }
        if session.presenters.is_empty() {
            return Err(missing(session, "at least one presenter is required"));
        }
        if session.chair_persons.is_empty() {
            return Err(missing(session, "at least one chairperson is required"));
        }
        Ok(())
    }
}

fn missing(session: &Session, message: &'static str) -> SchedulingError {
    SchedulingError::InvalidSession {
        message: message.into(),
        context: Some(format!("session {}", session.id).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use podium_domain::schedule::TimeWindow;

    fn window() -> TimeWindow {
        TimeWindow::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn talk_needs_presenter_and_chair() {
        let bare = Session::builder().id("talk").window(window()).build();
        let err = SessionPolicy::check(&bare).unwrap_err();
        assert!(err.to_string().contains("presenter"));

        let no_chair = Session::builder()
            .id("talk")
            .window(window())
            .presenters(vec!["ada".into()])
            .build();
        let err = SessionPolicy::check(&no_chair).unwrap_err();
        assert!(err.to_string().contains("chairperson"));

        let complete = Session::builder()
            .id("talk")
            .window(window())
            .presenters(vec!["ada".into()])
            .chair_persons(vec!["grace".into()])
            .build();
        assert!(SessionPolicy::check(&complete).is_ok());
    }

    #[test]
    fn breaks_only_need_a_valid_window() {
        let lunch = Session::builder().id("lunch").window(window()).is_break(true).build();
        assert!(SessionPolicy::check(&lunch).is_ok());

        let undated = Session::builder().id("lunch").is_break(true).build();
        assert!(matches!(
            SessionPolicy::check(&undated),
            Err(SchedulingError::InvalidSession { .. })
        ));
    }
}

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use podium_domain::ids::{DayId, PersonId};
use podium_domain::schedule::{Day, Session, TimeWindow};
use serde_json::json;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
}

fn window(from: (u32, u32), to: (u32, u32)) -> TimeWindow {
    TimeWindow::new(at(from.0, from.1), at(to.0, to.1))
}

#[test]
fn window_validity() {
    assert!(window((10, 0), (11, 0)).is_valid());
    assert!(!window((11, 0), (11, 0)).is_valid());
    assert!(!window((12, 0), (11, 0)).is_valid());
    assert_eq!(window((10, 0), (11, 30)).duration().num_minutes(), 90);
}

#[test]
fn touching_windows_do_not_overlap() {
    let morning = window((10, 0), (11, 0));
    let late_morning = window((11, 0), (12, 0));
    assert!(!morning.overlaps(&late_morning));
    assert!(!late_morning.overlaps(&morning));

    let spill = window((10, 0), (11, 1));
    assert!(spill.overlaps(&late_morning));
    assert!(late_morning.overlaps(&spill));
}

#[test]
fn session_json_uses_camel_case_and_flat_times() {
    let session = Session::builder()
        .id("s-1")
        .title("Keynote")
        .window(window((9, 0), (10, 0)))
        .presenters(vec![PersonId::from("p-1")])
        .chair_persons(vec![PersonId::from("p-2")])
        .build();

    let value = serde_json::to_value(&session).expect("serialize");
    assert_eq!(value["startTime"], json!("2024-03-01T09:00:00Z"));
    assert_eq!(value["endTime"], json!("2024-03-01T10:00:00Z"));
    assert_eq!(value["chairPersons"], json!(["p-2"]));
    assert_eq!(value["isBreak"], json!(false));

    let back: Session = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, session);
}

#[test]
fn session_without_both_times_has_no_window() {
    let raw = json!({ "id": "s-2", "title": "Draft", "startTime": "2024-03-01T09:00:00Z" });
    let session: Session = serde_json::from_value(raw).expect("deserialize");
    assert!(session.window.is_none());
    assert!(session.presenters.is_empty());
}

#[test]
fn session_with_null_time_has_no_window() {
    let raw = json!({ "id": "s-3", "startTime": null, "endTime": "2024-03-01T10:00:00Z" });
    let session: Session = serde_json::from_value(raw).expect("deserialize");
    assert!(session.window.is_none());
}

#[test]
fn malformed_session_time_is_a_deserialization_error() {
    let zoneless = json!({
        "id": "s-4",
        "startTime": "2024-03-01 10:00",
        "endTime": "2024-03-01T11:00:00Z",
        "presenters": ["ada"],
    });
    assert!(serde_json::from_value::<Session>(zoneless).is_err());

    let garbage = json!({ "id": "s-5", "startTime": "2024-03-01T09:00:00Z", "endTime": 42 });
    assert!(serde_json::from_value::<Session>(garbage).is_err());
}

#[test]
fn day_keeps_sessions_ordered_with_stable_ties() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut day = Day::new(DayId::from("d-1"), date, window((9, 0), (17, 0)));

    let undated = Session::builder().id("draft").build();
    let late = Session::builder().id("late").window(window((14, 0), (15, 0))).build();
    let first = Session::builder().id("first").window(window((10, 0), (11, 0))).build();
    let tie = Session::builder().id("tie").window(window((10, 0), (10, 30))).build();

    day.insert_session(undated);
    day.insert_session(late);
    day.insert_session(first);
    day.insert_session(tie);

    let order: Vec<&str> = day.sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, ["first", "tie", "late", "draft"]);
}

#[test]
fn untitled_breaks_get_a_display_title() {
    let lunch = Session::builder().id("session:lunch").is_break(true).build();
    let named = Session::builder().id("session:coffee").title("Coffee").is_break(true).build();
    let talk = Session::builder().id("session:talk").build();

    assert_eq!(lunch.display_title(), podium_domain::constants::BREAK_TITLE);
    assert_eq!(named.display_title(), "Coffee");
    assert_eq!(talk.display_title(), "");
}

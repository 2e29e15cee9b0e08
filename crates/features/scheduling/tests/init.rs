use chrono::NaiveDate;
use podium_domain::config::PodiumConfig;
use podium_domain::registry::FeatureSlice;
use podium_scheduling::{ConflictPolicy, Scheduling, SchedulingError, init};

#[test]
fn init_creates_slice() {
    let slice = init(&PodiumConfig::default()).expect("init should succeed");

    assert_eq!(slice.id, std::any::TypeId::of::<Scheduling>());
    assert_eq!(slice.name, "scheduling");

    let scheduling = slice.downcast_ref::<Scheduling>().expect("scheduling slice");
    assert_eq!(scheduling.policy(), ConflictPolicy::SameRole);
    assert_eq!(scheduling.offset().local_minus_utc(), 0);
}

#[test]
fn offset_and_policy_come_from_config() {
    let mut config = PodiumConfig::default();
    config.schedule.utc_offset_minutes = -300;
    config.schedule.cross_role_conflicts = true;

    let scheduling = Scheduling::from_config(&config).unwrap();
    assert_eq!(scheduling.name(), "scheduling");
    assert_eq!(scheduling.policy(), ConflictPolicy::CrossRole);

    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let days = scheduling.generate_days(day, day).unwrap();
    assert_eq!(days[0].window.start, day.and_hms_opt(14, 0, 0).unwrap().and_utc());
}

#[test]
fn inverted_working_hours_fail_init() {
    let mut config = PodiumConfig::default();
    config.schedule.day_start = config.schedule.day_end;

    let err = init(&config).unwrap_err();
    assert!(matches!(err, SchedulingError::InvalidTimeWindow { .. }));
    assert!(err.to_string().contains("Reading schedule.day_start/day_end"));
}

#[test]
fn out_of_range_offset_is_rejected() {
    let mut config = PodiumConfig::default();
    config.schedule.utc_offset_minutes = 24 * 60;

    assert!(matches!(Scheduling::from_config(&config), Err(SchedulingError::Internal { .. })));
}

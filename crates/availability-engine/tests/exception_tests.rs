//! Tests for the exception collections: CRUD semantics and wire shape.

use availability_engine::{
    AlternatingReason, ClosureReason, EngineError, ExceptionSet, IntermittentException,
    SpecificDateException, Verdict, WeekParity,
};
use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn set_with_saturday_rule() -> (ExceptionSet, Uuid) {
    let mut set = ExceptionSet::new();
    let id = set.add_alternating(
        Weekday::Sat,
        WeekParity::EvenWeeks,
        date(2025, 9, 1),
        AlternatingReason::StaffRest,
        Some("alternating Saturdays".to_string()),
    );
    (set, id)
}

// ── Specific-date CRUD ──────────────────────────────────────────────────────

#[test]
fn closing_a_date_assigns_a_fresh_id_per_record() {
    let mut set = ExceptionSet::new();
    let a = set
        .close_date(date(2025, 9, 17), ClosureReason::Maintenance, None)
        .unwrap();
    let b = set
        .close_date(date(2025, 9, 25), ClosureReason::Holiday, None)
        .unwrap();

    assert_ne!(a, b);
    assert_eq!(set.specific.len(), 2);
    assert!(!set.specific[0].is_available);
}

#[test]
fn closing_the_same_date_twice_is_rejected() {
    let mut set = ExceptionSet::new();
    let target = date(2025, 9, 17);
    set.close_date(target, ClosureReason::Maintenance, None)
        .unwrap();

    let err = set
        .close_date(target, ClosureReason::Holiday, None)
        .unwrap_err();
    assert_eq!(err, EngineError::DuplicateDate(target));
    assert_eq!(set.specific.len(), 1, "rejected insert must not mutate");
}

#[test]
fn updating_a_closure_replaces_reason_and_notes() {
    let mut set = ExceptionSet::new();
    let id = set
        .close_date(date(2025, 9, 17), ClosureReason::Maintenance, None)
        .unwrap();

    assert!(set.update_specific(id, ClosureReason::Vacation, Some("two weeks off".into())));

    let record = set.specific_for(date(2025, 9, 17)).unwrap();
    assert_eq!(record.reason, ClosureReason::Vacation);
    assert_eq!(record.notes.as_deref(), Some("two weeks off"));
    assert_eq!(record.id, id, "identity survives the edit");
}

#[test]
fn unknown_ids_are_no_ops() {
    let mut set = ExceptionSet::new();
    set.close_date(date(2025, 9, 17), ClosureReason::Maintenance, None)
        .unwrap();
    let snapshot = set.clone();
    let ghost = Uuid::new_v4();

    assert!(!set.update_specific(ghost, ClosureReason::Holiday, None));
    assert!(!set.restore_date(ghost));
    assert!(!set.update_alternating(
        ghost,
        Weekday::Mon,
        WeekParity::OddWeeks,
        AlternatingReason::Other,
        None
    ));
    assert!(!set.toggle_alternating(ghost));
    assert!(!set.remove_alternating(ghost));
    assert_eq!(set, snapshot);
}

#[test]
fn restoring_a_date_falls_through_to_intermittent_evaluation() {
    // Saturday 2025-09-06 is closed by both a one-off and an even-weeks rule.
    let (mut set, rule_id) = set_with_saturday_rule();
    let target = date(2025, 9, 6);
    let closure_id = set
        .close_date(target, ClosureReason::Personal, None)
        .unwrap();

    assert!(matches!(
        set.resolve(target),
        Verdict::ClosedSpecific { .. }
    ));

    // Deleting the one-off exposes the intermittent layer, not availability.
    assert!(set.restore_date(closure_id));
    match set.resolve(target) {
        Verdict::ClosedIntermittent { exception } => assert_eq!(exception.id, rule_id),
        other => panic!("expected ClosedIntermittent, got {:?}", other),
    }

    // And removing the rule finally opens the day.
    assert!(set.remove_alternating(rule_id));
    assert!(set.resolve(target).is_open());
}

// ── Alternating-rule CRUD ───────────────────────────────────────────────────

#[test]
fn new_alternating_rules_start_active() {
    let (set, id) = set_with_saturday_rule();
    let rule = set.intermittent.iter().find(|r| r.id == id).unwrap();
    assert!(rule.is_active);
    assert_eq!(rule.start_date, date(2025, 9, 1));
}

#[test]
fn editing_a_rule_never_moves_its_start_date() {
    let (mut set, id) = set_with_saturday_rule();

    assert!(set.update_alternating(
        id,
        Weekday::Sun,
        WeekParity::OddWeeks,
        AlternatingReason::Training,
        None
    ));

    let rule = set.intermittent.iter().find(|r| r.id == id).unwrap();
    assert_eq!(rule.day_of_week, Weekday::Sun);
    assert_eq!(rule.pattern, WeekParity::OddWeeks);
    assert_eq!(rule.reason, AlternatingReason::Training);
    assert_eq!(rule.notes, None);
    assert_eq!(rule.start_date, date(2025, 9, 1), "anchor is immutable");
}

#[test]
fn toggling_twice_restores_the_original_closing_behavior() {
    let (mut set, id) = set_with_saturday_rule();
    let closed_saturday = date(2025, 9, 6);

    assert!(!set.resolve(closed_saturday).is_open());

    set.toggle_alternating(id);
    assert!(set.resolve(closed_saturday).is_open());

    set.toggle_alternating(id);
    assert!(!set.resolve(closed_saturday).is_open());
}

#[test]
fn alternating_lookup_returns_the_first_active_rule_for_a_weekday() {
    let (mut set, first) = set_with_saturday_rule();
    set.add_alternating(
        Weekday::Sat,
        WeekParity::OddWeeks,
        date(2025, 9, 1),
        AlternatingReason::Events,
        None,
    );

    assert_eq!(set.alternating_for(Weekday::Sat).unwrap().id, first);
    assert!(set.alternating_for(Weekday::Mon).is_none());

    // Deactivating the first rule promotes the second.
    set.toggle_alternating(first);
    assert_ne!(set.alternating_for(Weekday::Sat).unwrap().id, first);
}

// ── Wire shape ──────────────────────────────────────────────────────────────

#[test]
fn specific_exception_serializes_with_kebab_case_tags_and_iso_dates() {
    let record = SpecificDateException {
        id: Uuid::nil(),
        date: date(2025, 9, 17),
        is_available: false,
        reason: ClosureReason::Maintenance,
        notes: None,
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["date"], "2025-09-17");
    assert_eq!(json["reason"], "maintenance");
    assert!(json.get("notes").is_none(), "empty notes are omitted");
}

#[test]
fn intermittent_exception_serializes_weekday_as_sunday_based_index() {
    let record = IntermittentException {
        id: Uuid::nil(),
        day_of_week: Weekday::Sat,
        pattern: WeekParity::EvenWeeks,
        start_date: date(2025, 9, 1),
        is_active: true,
        reason: AlternatingReason::StaffRest,
        notes: Some("alternating Saturdays".to_string()),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["day_of_week"], 6);
    assert_eq!(json["pattern"], "even-weeks");
    assert_eq!(json["start_date"], "2025-09-01");
    assert_eq!(json["reason"], "staff-rest");

    let back: IntermittentException = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn out_of_range_weekday_index_fails_deserialization() {
    let json = serde_json::json!({
        "id": Uuid::nil(),
        "day_of_week": 9,
        "pattern": "even-weeks",
        "start_date": "2025-09-01",
        "is_active": true
    });

    assert!(serde_json::from_value::<IntermittentException>(json).is_err());
}

#[test]
fn unknown_reason_tags_fall_back_to_other() {
    let json = serde_json::json!({
        "id": Uuid::nil(),
        "date": "2025-09-17",
        "is_available": false,
        "reason": "inventory-day"
    });

    let record: SpecificDateException = serde_json::from_value(json).unwrap();
    assert_eq!(record.reason, ClosureReason::Other);
}

#[test]
fn missing_reason_defaults_to_other() {
    let json = serde_json::json!({
        "id": Uuid::nil(),
        "date": "2025-09-17",
        "is_available": false
    });

    let record: SpecificDateException = serde_json::from_value(json).unwrap();
    assert_eq!(record.reason, ClosureReason::Other);
}

#[test]
fn exception_set_round_trips_through_json() {
    let (mut set, _) = set_with_saturday_rule();
    set.close_date(
        date(2025, 9, 17),
        ClosureReason::Maintenance,
        Some("deep clean".to_string()),
    )
    .unwrap();

    let json = serde_json::to_string(&set).unwrap();
    let back: ExceptionSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

//! Integration tests for the time-accounting engine.
//!
//! This test suite drives the engine through the public API:
//! - Pay-week partitioning at the Thursday boundary
//! - Hour counting and title annotation
//! - Event creation, resize and deletion
//! - Calendar deletion cascade and the protected calendar
//! - Weekly aggregation and limit warnings
//! - Store round-trips through the workspace

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

use workaholic_engine::calculation::{
    calculate_hours, create_event, delete_calendar, derive_event, hours_by_calendar,
    job_hours_by_week, pay_week_key, reinterval_event, start_of_pay_week, week_key,
    weekly_warnings,
};
use workaholic_engine::config::{ConfigLoader, EngineConfig};
use workaholic_engine::error::EngineError;
use workaholic_engine::models::{Calendar, EventTitle, ShiftEvent};
use workaholic_engine::store::{KeyValueStore, MemoryStore, NewShift, Workspace};

// =============================================================================
// Test Helpers
// =============================================================================

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn calendars() -> Vec<Calendar> {
    vec![
        Calendar::personal("personal", "Personal", "#a78bfa"),
        Calendar::job("cal_seas", "SEAS Office", "#34d399"),
        Calendar::job("cal_bar", "Bar", "#60a5fa"),
    ]
}

fn shift(id: &str, calendar_id: &str, start: &str, end: &str) -> ShiftEvent {
    derive_event(
        id.to_string(),
        &EventTitle::default(),
        dt(start),
        dt(end),
        calendar_id.to_string(),
        Some("#34d399"),
    )
}

fn open_workspace(store: MemoryStore) -> Workspace<MemoryStore> {
    Workspace::open(store, EngineConfig::default(), dt("2024-05-06 12:00:00"))
        .expect("default config is valid")
}

// =============================================================================
// Pay Week
// =============================================================================

#[test]
fn test_pay_week_changes_exactly_at_thursday_midnight() {
    let wednesday_night = dt("2024-05-01 23:59:59");
    let thursday_midnight = dt("2024-05-02 00:00:00");

    assert_eq!(pay_week_key(wednesday_night, 4), "2024-04-25");
    assert_eq!(pay_week_key(thursday_midnight, 4), "2024-05-02");
}

#[test]
fn test_start_of_pay_week_is_idempotent() {
    let start = start_of_pay_week(dt("2024-05-06 14:00:00"), 4);
    assert_eq!(start_of_pay_week(start, 4), start);
    assert_eq!(week_key(start), "2024-05-02");
}

// =============================================================================
// Hours
// =============================================================================

#[test]
fn test_eight_hour_day() {
    assert_eq!(
        calculate_hours(dt("2024-01-01 09:00:00"), dt("2024-01-01 17:00:00")),
        decimal("8.0")
    );
}

#[test]
fn test_one_minute() {
    assert_eq!(
        calculate_hours(dt("2024-01-01 09:00:00"), dt("2024-01-01 09:01:00")),
        decimal("0.02")
    );
}

// =============================================================================
// Event Derivation
// =============================================================================

#[test]
fn test_resize_preserves_hand_entered_title() {
    let calendars = calendars();
    let event = create_event(
        &calendars[1],
        dt("2024-05-02 09:00:00"),
        dt("2024-05-02 12:00:00"),
        Some("Shift - SEAS"),
    )
    .unwrap();
    assert_eq!(event.title, "Shift - SEAS (3h)");

    let events = vec![event.clone()];
    let resized = reinterval_event(
        &events,
        &calendars,
        &event.id,
        dt("2024-05-02 09:00:00"),
        dt("2024-05-02 14:00:00"),
    )
    .unwrap();

    assert_eq!(resized[0].title, "Shift - SEAS (5h)");
    assert_eq!(resized[0].hours(), decimal("5"));
    assert_eq!(resized[0].id, event.id);
}

#[test]
fn test_resize_of_user_edited_title() {
    // the user typed a title over a bare "(8h)" annotation
    let mut event = shift("evt_1", "cal_bar", "2024-05-03 18:00:00", "2024-05-04 02:00:00");
    event.title = "Closing shift (8h)".to_string();

    let resized = reinterval_event(
        &[event],
        &calendars(),
        "evt_1",
        dt("2024-05-03 18:00:00"),
        dt("2024-05-04 01:15:00"),
    )
    .unwrap();

    assert_eq!(resized[0].title, "Closing shift (7.25h)");
    assert_eq!(resized[0].background_color.as_deref(), Some("#60a5fa"));
}

// =============================================================================
// Calendar Deletion
// =============================================================================

#[test]
fn test_deleting_personal_is_noop() {
    let events = vec![
        shift("e1", "personal", "2024-05-02 09:00:00", "2024-05-02 10:00:00"),
        shift("e2", "cal_seas", "2024-05-02 11:00:00", "2024-05-02 12:00:00"),
    ];
    let (next_calendars, next_events) = delete_calendar(&calendars(), &events, "personal");
    assert_eq!(next_calendars, calendars());
    assert_eq!(next_events, events);
}

#[test]
fn test_deleting_job_calendar_cascades_to_its_events_only() {
    let events = vec![
        shift("e1", "personal", "2024-05-02 09:00:00", "2024-05-02 10:00:00"),
        shift("e2", "cal_seas", "2024-05-02 11:00:00", "2024-05-02 12:00:00"),
        shift("e3", "cal_bar", "2024-05-02 13:00:00", "2024-05-02 14:00:00"),
        shift("e4", "cal_seas", "2024-05-03 11:00:00", "2024-05-03 12:00:00"),
    ];
    let (next_calendars, next_events) = delete_calendar(&calendars(), &events, "cal_seas");

    assert_eq!(next_calendars.len(), 2);
    assert!(next_calendars.iter().all(|c| c.id != "cal_seas"));
    assert_eq!(next_events, vec![events[0].clone(), events[2].clone()]);
}

// =============================================================================
// Aggregation and Limits
// =============================================================================

fn twenty_two_hour_week() -> Vec<ShiftEvent> {
    vec![
        shift("e1", "cal_seas", "2024-05-02 08:00:00", "2024-05-02 16:00:00"),
        shift("e2", "cal_bar", "2024-05-04 17:00:00", "2024-05-05 01:00:00"),
        shift("e3", "cal_seas", "2024-05-07 09:00:00", "2024-05-07 15:00:00"),
        // personal time is not job time
        shift("e4", "personal", "2024-05-05 10:00:00", "2024-05-05 15:00:00"),
    ]
}

#[test]
fn test_twenty_two_hours_over_limit_of_twenty() {
    let totals = job_hours_by_week(&twenty_two_hour_week(), &calendars(), 4);
    assert_eq!(totals["2024-05-02"], decimal("22"));

    let warnings = weekly_warnings(&totals, Some(decimal("20")));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].week_key, "2024-05-02");
    assert_eq!(warnings[0].hours_worked, decimal("22"));
    assert_eq!(warnings[0].limit, decimal("20"));
}

#[test]
fn test_twenty_two_hours_under_limit_of_twenty_five() {
    let totals = job_hours_by_week(&twenty_two_hour_week(), &calendars(), 4);
    assert!(weekly_warnings(&totals, Some(decimal("25"))).is_empty());
}

#[test]
fn test_warnings_most_recent_first() {
    let mut events = twenty_two_hour_week();
    events.push(shift("e5", "cal_bar", "2024-04-25 06:00:00", "2024-04-25 21:00:00"));
    events.push(shift("e6", "cal_seas", "2024-04-29 09:00:00", "2024-04-29 15:00:00"));

    let totals = job_hours_by_week(&events, &calendars(), 4);
    let warnings = weekly_warnings(&totals, Some(decimal("20")));
    let keys: Vec<&str> = warnings.iter().map(|w| w.week_key.as_str()).collect();
    assert_eq!(keys, vec!["2024-05-02", "2024-04-25"]);
}

#[test]
fn test_calendar_with_no_events_reports_zero() {
    let hours = hours_by_calendar(&twenty_two_hour_week(), &calendars(), "2024-05-09", 4);
    for calendar in calendars() {
        assert_eq!(hours.get(&calendar.id), Some(&Decimal::ZERO));
    }
}

// =============================================================================
// Workspace
// =============================================================================

#[test]
fn test_workspace_end_to_end() {
    let mut workspace = open_workspace(MemoryStore::default());
    let seas = workspace.add_calendar("SEAS Office").unwrap().unwrap();
    let bar = workspace.add_calendar("Bar").unwrap().unwrap();

    workspace
        .create_event(
            NewShift::new(dt("2024-05-02 08:00:00"), dt("2024-05-02 20:00:00")).on_calendar(&seas),
        )
        .unwrap();
    let late = workspace
        .create_event(
            NewShift::new(dt("2024-05-04 17:00:00"), dt("2024-05-05 01:00:00"))
                .with_title("Bar close")
                .on_calendar(&bar),
        )
        .unwrap();
    workspace
        .create_event(NewShift::new(dt("2024-05-05 10:00:00"), dt("2024-05-05 15:00:00")))
        .unwrap();

    let summary = workspace.summary();
    assert_eq!(summary.week_key, "2024-05-02");
    assert_eq!(summary.display_range, "May 2 – May 8");
    assert_eq!(summary.job_hours, decimal("20"));
    assert_eq!(summary.hours_for("personal"), decimal("5"));
    assert!(!summary.is_over_limit());
    assert!(summary.warnings.is_empty());

    workspace
        .reinterval_event(&late, dt("2024-05-04 17:00:00"), dt("2024-05-05 03:00:00"))
        .unwrap();

    let summary = workspace.summary();
    assert_eq!(summary.job_hours, decimal("22"));
    assert!(summary.is_over_limit());
    assert_eq!(summary.warnings.len(), 1);
    assert_eq!(summary.hours_for(&bar), decimal("10"));

    let resized = workspace.events().iter().find(|e| e.id == late).unwrap();
    assert_eq!(resized.title, "Bar close (10h)");

    workspace.set_weekly_limit(None).unwrap();
    assert!(workspace.summary().warnings.is_empty());
}

#[test]
fn test_workspace_state_survives_reopen() {
    let mut workspace = open_workspace(MemoryStore::default());
    let seas = workspace.add_calendar("SEAS Office").unwrap().unwrap();
    let event_id = workspace
        .create_event(
            NewShift::new(dt("2024-04-26 09:00:00"), dt("2024-04-26 17:30:00"))
                .with_title("Front desk")
                .on_calendar(&seas),
        )
        .unwrap();
    workspace.step_week(-1).unwrap();
    workspace.set_weekly_limit(Some(decimal("8"))).unwrap();
    workspace.toggle_calendar(&seas).unwrap();

    let before_calendars = workspace.calendars().to_vec();
    let before_events = workspace.events().to_vec();
    let store = workspace.into_store();

    let reopened = Workspace::open(store, EngineConfig::default(), dt("2030-01-01 00:00:00")).unwrap();
    assert_eq!(reopened.calendars().to_vec(), before_calendars);
    assert_eq!(reopened.events().to_vec(), before_events);
    assert_eq!(reopened.events()[0].id, event_id);
    assert_eq!(reopened.selected_week(), "2024-04-25");
    assert_eq!(reopened.weekly_limit(), Some(decimal("8")));

    // hidden calendars still count toward the limit
    assert!(reopened.visible_events().is_empty());
    let summary = reopened.summary();
    assert_eq!(summary.job_hours, decimal("8.5"));
    assert_eq!(summary.warnings.len(), 1);
}

#[test]
fn test_workspace_recolor_refreshes_events() {
    let mut workspace = open_workspace(MemoryStore::default());
    let seas = workspace.add_calendar("SEAS Office").unwrap().unwrap();
    workspace
        .create_event(
            NewShift::new(dt("2024-05-02 09:00:00"), dt("2024-05-02 10:00:00")).on_calendar(&seas),
        )
        .unwrap();

    workspace.recolor_calendar(&seas, "#fb923c").unwrap();

    let event = &workspace.events()[0];
    assert_eq!(event.background_color.as_deref(), Some("#fb923c"));
    assert_eq!(event.border_color.as_deref(), Some("#fb923c"));

    let stored = workspace.store().get("workaholic_events").unwrap();
    assert!(stored.contains("#fb923c"));
}

#[test]
fn test_workspace_delete_calendar_cascades_and_persists() {
    let mut workspace = open_workspace(MemoryStore::default());
    let seas = workspace.add_calendar("SEAS Office").unwrap().unwrap();
    workspace
        .create_event(
            NewShift::new(dt("2024-05-02 09:00:00"), dt("2024-05-02 10:00:00")).on_calendar(&seas),
        )
        .unwrap();
    workspace
        .create_event(NewShift::new(dt("2024-05-02 11:00:00"), dt("2024-05-02 12:00:00")))
        .unwrap();

    workspace.delete_calendar(&seas).unwrap();
    assert_eq!(workspace.calendars().len(), 1);
    assert_eq!(workspace.events().len(), 1);
    assert_eq!(workspace.events()[0].calendar_id(), "personal");

    let store = workspace.into_store();
    let reopened = open_workspace(store);
    assert_eq!(reopened.events().len(), 1);
}

#[test]
fn test_workspace_rejects_invalid_interval() {
    let mut workspace = open_workspace(MemoryStore::default());
    let result = workspace.create_event(NewShift::new(
        dt("2024-05-02 10:00:00"),
        dt("2024-05-02 09:00:00"),
    ));
    assert!(matches!(result, Err(EngineError::InvalidInterval { .. })));
    assert!(workspace.events().is_empty());
}

#[test]
fn test_workspace_reinterval_unknown_event() {
    let mut workspace = open_workspace(MemoryStore::default());
    let result = workspace.reinterval_event(
        "missing",
        dt("2024-05-02 09:00:00"),
        dt("2024-05-02 10:00:00"),
    );
    assert!(matches!(result, Err(EngineError::EventNotFound { .. })));
}

#[test]
fn test_workspace_with_loaded_config() {
    let config = ConfigLoader::load("./config/workaholic.yaml")
        .expect("Failed to load config")
        .into_config();
    let workspace = Workspace::open(MemoryStore::default(), config, dt("2024-05-06 12:00:00")).unwrap();
    assert_eq!(workspace.selected_week(), "2024-05-02");
    assert_eq!(workspace.weekly_limit(), Some(decimal("20")));
}

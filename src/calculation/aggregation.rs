//! Weekly hour aggregation.
//!
//! Partitions events into pay weeks and sums their cached hour counts per
//! calendar and per week. Events without a positive `start`/`end` interval are
//! skipped, as are events whose calendar is not in the supplied list.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::trace;

use crate::models::{Calendar, ShiftEvent, WeekSummary};

use super::hours::round2;
use super::limit_monitor::weekly_warnings;
use super::pay_week::{format_date_range, parse_week_key, pay_week_key};

/// Start instant of an event that can be counted, or `None` to skip it.
fn countable_start(event: &ShiftEvent) -> Option<NaiveDateTime> {
    let interval = event.interval();
    if interval.is_none() {
        trace!(event_id = %event.id, "Skipping event without a positive interval");
    }
    interval.map(|(start, _)| start)
}

fn job_calendar_ids(calendars: &[Calendar]) -> HashSet<&str> {
    calendars
        .iter()
        .filter(|c| c.is_job())
        .map(|c| c.id.as_str())
        .collect()
}

/// Hours per calendar for the week keyed `selected_week_key`.
///
/// Every calendar in `calendars` appears in the result, with zero when it has
/// no events that week.
///
/// # Example
///
/// ```
/// use workaholic_engine::calculation::{create_event, hours_by_calendar};
/// use workaholic_engine::models::Calendar;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let calendars = vec![
///     Calendar::personal("personal", "Personal", "#a78bfa"),
///     Calendar::job("cal_seas", "SEAS Office", "#34d399"),
/// ];
/// let events = vec![
///     create_event(&calendars[1], dt("2024-05-03 09:00:00"), dt("2024-05-03 13:30:00"), None).unwrap(),
/// ];
///
/// let hours = hours_by_calendar(&events, &calendars, "2024-05-02", 4);
/// assert_eq!(hours["cal_seas"], Decimal::new(45, 1));
/// assert_eq!(hours["personal"], Decimal::ZERO);
/// ```
pub fn hours_by_calendar(
    events: &[ShiftEvent],
    calendars: &[Calendar],
    selected_week_key: &str,
    week_start_day_of_week: u8,
) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = calendars
        .iter()
        .map(|c| (c.id.clone(), Decimal::ZERO))
        .collect();

    for event in events {
        let Some(start) = countable_start(event) else {
            continue;
        };
        if pay_week_key(start, week_start_day_of_week) != selected_week_key {
            continue;
        }
        if let Some(total) = totals.get_mut(event.calendar_id()) {
            *total += event.hours();
        }
    }

    for total in totals.values_mut() {
        *total = round2(*total);
    }
    totals
}

/// Job-calendar hours in the week keyed `selected_week_key`.
pub fn selected_week_job_hours(
    events: &[ShiftEvent],
    calendars: &[Calendar],
    selected_week_key: &str,
    week_start_day_of_week: u8,
) -> Decimal {
    let jobs = job_calendar_ids(calendars);

    let total: Decimal = events
        .iter()
        .filter(|e| jobs.contains(e.calendar_id()))
        .filter_map(|e| countable_start(e).map(|start| (start, e.hours())))
        .filter(|(start, _)| pay_week_key(*start, week_start_day_of_week) == selected_week_key)
        .map(|(_, hours)| hours)
        .sum();

    round2(total)
}

/// Job-calendar hours for every week that has any.
///
/// Weeks with no job events are absent from the result.
pub fn job_hours_by_week(
    events: &[ShiftEvent],
    calendars: &[Calendar],
    week_start_day_of_week: u8,
) -> HashMap<String, Decimal> {
    let jobs = job_calendar_ids(calendars);
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    for event in events.iter().filter(|e| jobs.contains(e.calendar_id())) {
        let Some(start) = countable_start(event) else {
            continue;
        };
        *totals
            .entry(pay_week_key(start, week_start_day_of_week))
            .or_insert(Decimal::ZERO) += event.hours();
    }

    for total in totals.values_mut() {
        *total = round2(*total);
    }
    totals
}

/// Runs a full aggregation pass for the selected week.
///
/// Combines per-calendar hours, the selected week's job total, and the
/// limit warnings across all weeks.
pub fn summarize_week(
    events: &[ShiftEvent],
    calendars: &[Calendar],
    selected_week_key: &str,
    week_start_day_of_week: u8,
    weekly_limit: Option<Decimal>,
) -> WeekSummary {
    let display_range = parse_week_key(selected_week_key)
        .map(format_date_range)
        .unwrap_or_else(|| selected_week_key.to_string());

    let totals = job_hours_by_week(events, calendars, week_start_day_of_week);

    WeekSummary {
        week_key: selected_week_key.to_string(),
        display_range,
        hours_by_calendar: hours_by_calendar(
            events,
            calendars,
            selected_week_key,
            week_start_day_of_week,
        ),
        job_hours: selected_week_job_hours(
            events,
            calendars,
            selected_week_key,
            week_start_day_of_week,
        ),
        weekly_limit,
        warnings: weekly_warnings(&totals, weekly_limit),
    }
}

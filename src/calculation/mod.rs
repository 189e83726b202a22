//! Calculation logic for the time-accounting engine.
//!
//! This module contains the pure engine functions: pay-week partitioning,
//! hour counting, event derivation (create, reinterval, delete), calendar
//! list operations, weekly aggregation, and limit checking. None of them
//! hold state or mutate their inputs.

mod aggregation;
mod calendar_ops;
mod event_derivation;
mod hours;
mod limit_monitor;
mod pay_week;

pub use aggregation::{
    hours_by_calendar, job_hours_by_week, selected_week_job_hours, summarize_week,
};
pub use calendar_ops::{
    add_calendar, delete_calendar, palette_color, recolor_calendar, resolve_target_calendar,
    toggle_calendar, visible_events,
};
pub use event_derivation::{
    create_event, delete_event, derive_event, refresh_event_colors, reinterval_event,
};
pub use hours::{calculate_hours, is_positive_interval, round2};
pub use limit_monitor::{exceeds_limit, weekly_warnings};
pub use pay_week::{
    WEEK_KEY_FORMAT, format_date_range, format_range, parse_week_key, pay_week_key,
    pay_week_start_date, shift_week_key, start_of_pay_week, week_key,
};

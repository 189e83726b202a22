//! Core data models for the time-accounting engine.
//!
//! This module contains the calendar, shift event, and derived weekly types.

mod calendar;
mod shift_event;
mod week_summary;

pub use calendar::{
    Calendar, CalendarKind, DEFAULT_WEEK_START_DAY, PERSONAL_CALENDAR_NAME, PaySettings,
};
pub use shift_event::{EventProps, EventTitle, ShiftEvent, hours_label};
pub use week_summary::{WeekSummary, WeeklyWarning};

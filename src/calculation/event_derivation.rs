//! Event derivation: building and re-deriving shift events.
//!
//! Every mutation site funnels through [`derive_event`], which recomputes the
//! cached fields (hour count, composed title, colors) from the authoritative
//! ones (interval, owning calendar, base title). Inputs are never modified;
//! each operation returns a new event or a new collection.

use chrono::NaiveDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Calendar, EventProps, EventTitle, ShiftEvent};

use super::hours::{calculate_hours, is_positive_interval};

/// Builds an event from its authoritative fields.
///
/// `color` is `None` when the owning calendar could not be resolved; the
/// event is still produced, with its colors unset.
pub fn derive_event(
    id: String,
    title: &EventTitle,
    start: NaiveDateTime,
    end: NaiveDateTime,
    calendar_id: String,
    color: Option<&str>,
) -> ShiftEvent {
    let hours = calculate_hours(start, end);
    ShiftEvent {
        id,
        title: title.compose(hours),
        start: Some(start),
        end: Some(end),
        background_color: color.map(str::to_string),
        border_color: color.map(str::to_string),
        extended_props: EventProps { hours, calendar_id },
    }
}

/// Creates a new event on `calendar` spanning `[start, end)`.
///
/// The title is `"<base> (Xh)"`, or just `"(Xh)"` when no base title is given.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInterval`] when `end` is not after `start`.
///
/// # Example
///
/// ```
/// use workaholic_engine::calculation::create_event;
/// use workaholic_engine::models::Calendar;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let calendar = Calendar::job("cal_seas", "SEAS Office", "#34d399");
/// let start = NaiveDateTime::parse_from_str("2024-05-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-05-02 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let event = create_event(&calendar, start, end, Some("Shift - SEAS")).unwrap();
/// assert_eq!(event.title, "Shift - SEAS (3h)");
/// assert_eq!(event.hours(), Decimal::new(3, 0));
/// assert_eq!(event.background_color.as_deref(), Some("#34d399"));
/// ```
pub fn create_event(
    calendar: &Calendar,
    start: NaiveDateTime,
    end: NaiveDateTime,
    base_title: Option<&str>,
) -> EngineResult<ShiftEvent> {
    if !is_positive_interval(start, end) {
        return Err(EngineError::InvalidInterval { start, end });
    }

    let title = EventTitle::new(base_title.unwrap_or_default());
    let event = derive_event(
        Uuid::new_v4().to_string(),
        &title,
        start,
        end,
        calendar.id.clone(),
        Some(&calendar.color),
    );
    debug!(event_id = %event.id, calendar_id = %calendar.id, hours = %event.hours(), "Created shift event");
    Ok(event)
}

/// Moves or resizes an existing event, returning the updated collection.
///
/// The user's base title survives; the hour annotation, hour count and colors
/// are recomputed. An event whose calendar no longer exists keeps its new
/// interval but loses its colors.
///
/// # Errors
///
/// - [`EngineError::InvalidInterval`] when `end` is not after `start`
/// - [`EngineError::EventNotFound`] when no event has `event_id`
pub fn reinterval_event(
    events: &[ShiftEvent],
    calendars: &[Calendar],
    event_id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> EngineResult<Vec<ShiftEvent>> {
    if !is_positive_interval(start, end) {
        return Err(EngineError::InvalidInterval { start, end });
    }

    let position = events
        .iter()
        .position(|e| e.id == event_id)
        .ok_or_else(|| EngineError::EventNotFound {
            event_id: event_id.to_string(),
        })?;

    let existing = &events[position];
    let calendar = calendars.iter().find(|c| c.id == existing.calendar_id());
    if calendar.is_none() {
        debug!(event_id, calendar_id = existing.calendar_id(), "Owning calendar missing, clearing colors");
    }

    let updated = derive_event(
        existing.id.clone(),
        &existing.title(),
        start,
        end,
        existing.calendar_id().to_string(),
        calendar.map(|c| c.color.as_str()),
    );

    let mut next = events.to_vec();
    next[position] = updated;
    Ok(next)
}

/// Re-reads colors for every event owned by `calendar`.
pub fn refresh_event_colors(events: &[ShiftEvent], calendar: &Calendar) -> Vec<ShiftEvent> {
    events
        .iter()
        .map(|e| {
            if e.calendar_id() == calendar.id {
                ShiftEvent {
                    background_color: Some(calendar.color.clone()),
                    border_color: Some(calendar.color.clone()),
                    ..e.clone()
                }
            } else {
                e.clone()
            }
        })
        .collect()
}

/// Removes one event by id. Unknown ids leave the collection unchanged.
pub fn delete_event(events: &[ShiftEvent], event_id: &str) -> Vec<ShiftEvent> {
    events.iter().filter(|e| e.id != event_id).cloned().collect()
}

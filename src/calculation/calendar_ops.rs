//! Calendar list operations.
//!
//! Adding, toggling, recoloring and deleting calendars, plus target-calendar
//! resolution for new events. Like the rest of the engine these take
//! snapshots and return replacement collections.

use tracing::debug;
use uuid::Uuid;

use crate::models::{Calendar, CalendarKind, PERSONAL_CALENDAR_NAME, ShiftEvent};

use super::event_derivation::refresh_event_colors;

/// Fallback when an empty palette is supplied.
const FALLBACK_COLOR: &str = "#a78bfa";

/// Picks the color for the calendar that will sit at index `count`.
pub fn palette_color(palette: &[String], count: usize) -> &str {
    if palette.is_empty() {
        FALLBACK_COLOR
    } else {
        &palette[count % palette.len()]
    }
}

/// Appends a new enabled job calendar named `name` (trimmed).
///
/// A blank name leaves the list unchanged.
///
/// # Example
///
/// ```
/// use workaholic_engine::calculation::add_calendar;
/// use workaholic_engine::models::{Calendar, CalendarKind};
///
/// let palette = vec!["#a78bfa".to_string(), "#34d399".to_string()];
/// let calendars = vec![Calendar::personal("personal", "Personal", "#a78bfa")];
///
/// let next = add_calendar(&calendars, "  SEAS Office ", &palette);
/// assert_eq!(next.len(), 2);
/// assert_eq!(next[1].name, "SEAS Office");
/// assert_eq!(next[1].color, "#34d399");
/// assert_eq!(next[1].kind, CalendarKind::Job);
///
/// assert_eq!(add_calendar(&calendars, "   ", &palette), calendars);
/// ```
pub fn add_calendar(calendars: &[Calendar], name: &str, palette: &[String]) -> Vec<Calendar> {
    let name = name.trim();
    if name.is_empty() {
        return calendars.to_vec();
    }

    let color = palette_color(palette, calendars.len());
    let calendar = Calendar::job(&Uuid::new_v4().to_string(), name, color);
    debug!(calendar_id = %calendar.id, name, color, "Added calendar");

    let mut next = calendars.to_vec();
    next.push(calendar);
    next
}

/// Flips `enabled` on the calendar with `calendar_id`.
pub fn toggle_calendar(calendars: &[Calendar], calendar_id: &str) -> Vec<Calendar> {
    calendars
        .iter()
        .map(|c| {
            if c.id == calendar_id {
                Calendar {
                    enabled: !c.enabled,
                    ..c.clone()
                }
            } else {
                c.clone()
            }
        })
        .collect()
}

/// Deletes a calendar and every event it owns.
///
/// The protected calendar and unknown ids are no-ops: both collections come
/// back unchanged.
pub fn delete_calendar(
    calendars: &[Calendar],
    events: &[ShiftEvent],
    calendar_id: &str,
) -> (Vec<Calendar>, Vec<ShiftEvent>) {
    match calendars.iter().find(|c| c.id == calendar_id) {
        Some(calendar) if calendar.is_protected() => {
            debug!(calendar_id, "Ignoring delete of protected calendar");
            (calendars.to_vec(), events.to_vec())
        }
        Some(_) => (
            calendars
                .iter()
                .filter(|c| c.id != calendar_id)
                .cloned()
                .collect(),
            events
                .iter()
                .filter(|e| e.calendar_id() != calendar_id)
                .cloned()
                .collect(),
        ),
        None => (calendars.to_vec(), events.to_vec()),
    }
}

/// Changes a calendar's color and re-derives its events' colors.
///
/// Returns `None` when no calendar has `calendar_id`.
pub fn recolor_calendar(
    calendars: &[Calendar],
    events: &[ShiftEvent],
    calendar_id: &str,
    color: &str,
) -> Option<(Vec<Calendar>, Vec<ShiftEvent>)> {
    let position = calendars.iter().position(|c| c.id == calendar_id)?;

    let mut next_calendars = calendars.to_vec();
    next_calendars[position].color = color.to_string();
    let next_events = refresh_event_colors(events, &next_calendars[position]);

    Some((next_calendars, next_events))
}

/// Events whose owning calendar is enabled.
pub fn visible_events(events: &[ShiftEvent], calendars: &[Calendar]) -> Vec<ShiftEvent> {
    events
        .iter()
        .filter(|e| {
            calendars
                .iter()
                .any(|c| c.enabled && c.id == e.calendar_id())
        })
        .cloned()
        .collect()
}

/// Picks the calendar a new event should land on.
///
/// Tries the explicit choice, then the active calendar, then the calendar
/// named "Personal", then any general calendar, then the first calendar. `None` only for an empty list.
pub fn resolve_target_calendar<'a>(
    calendars: &'a [Calendar],
    explicit: Option<&str>,
    active: Option<&str>,
) -> Option<&'a Calendar> {
    let by_id = |id: Option<&str>| id.and_then(|id| calendars.iter().find(|c| c.id == id));

    by_id(explicit)
        .or_else(|| by_id(active))
        .or_else(|| calendars.iter().find(|c| c.name == PERSONAL_CALENDAR_NAME))
        .or_else(|| calendars.iter().find(|c| c.kind == CalendarKind::General))
        .or_else(|| calendars.first())
}

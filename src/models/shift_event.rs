//! Shift event model and title handling.
//!
//! A [`ShiftEvent`] carries its authoritative fields (interval, owning
//! calendar, user title) alongside cached projections (hour count, colors,
//! the composed `"(Xh)"` title suffix). The cached fields are rewritten by the
//! derivation functions in [`crate::calculation`] at every mutation.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

static HOURS_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(\d+(\.\d+)?h\)\s*$").expect("hours suffix pattern is valid")
});

/// The user-entered part of an event title, kept apart from the hour annotation.
///
/// Stored titles are composed strings such as `"Shift - SEAS (3h)"`; this type
/// recovers the base text and recomposes it with a fresh hour count.
///
/// # Example
///
/// ```
/// use workaholic_engine::models::EventTitle;
/// use rust_decimal::Decimal;
///
/// let title = EventTitle::from_composed("Shift - SEAS (3h)");
/// assert_eq!(title.base(), "Shift - SEAS");
/// assert_eq!(title.compose(Decimal::new(5, 0)), "Shift - SEAS (5h)");
/// assert_eq!(EventTitle::default().compose(Decimal::new(75, 1)), "(7.5h)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTitle {
    base: String,
}

impl EventTitle {
    /// Wraps a base title that carries no hour annotation.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Strips a trailing `" (Xh)"` annotation from a stored title.
    pub fn from_composed(title: &str) -> Self {
        Self::new(HOURS_SUFFIX.replace(title, "").into_owned())
    }

    /// The user-entered text.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Composes the display title for the given hour count.
    ///
    /// An empty base yields the bare annotation, e.g. `"(8h)"`.
    pub fn compose(&self, hours: Decimal) -> String {
        let label = hours_label(hours);
        if self.base.trim().is_empty() {
            label
        } else {
            format!("{} {}", self.base, label)
        }
    }
}

/// Formats an hour count as `"(Xh)"` without trailing zeros.
pub fn hours_label(hours: Decimal) -> String {
    format!("({}h)", hours.normalize())
}

/// Derived properties stored next to the event, mirroring the calendar widget's
/// `extendedProps` bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventProps {
    /// Rounded duration in hours.
    pub hours: Decimal,
    /// Id of the owning calendar.
    pub calendar_id: String,
}

/// A timestamped shift on one calendar.
///
/// `start` and `end` are optional because partially-specified events are a
/// normal transient state; such events are skipped by aggregation.
///
/// # Example
///
/// ```
/// use workaholic_engine::models::{EventProps, ShiftEvent};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let event = ShiftEvent {
///     id: "evt_001".to_string(),
///     title: "Shift (8h)".to_string(),
///     start: NaiveDateTime::parse_from_str("2024-05-02 09:00:00", "%Y-%m-%d %H:%M:%S").ok(),
///     end: NaiveDateTime::parse_from_str("2024-05-02 17:00:00", "%Y-%m-%d %H:%M:%S").ok(),
///     background_color: Some("#34d399".to_string()),
///     border_color: Some("#34d399".to_string()),
///     extended_props: EventProps {
///         hours: Decimal::new(8, 0),
///         calendar_id: "cal_seas".to_string(),
///     },
/// };
/// assert!(event.interval().is_some());
/// assert_eq!(event.title().base(), "Shift");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEvent {
    /// Unique, stable identifier.
    pub id: String,
    /// Composed display title (base text plus hour annotation).
    #[serde(default)]
    pub title: String,
    /// Interval start, local wall-clock time.
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    /// Interval end, local wall-clock time.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    /// Fill color copied from the owning calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Border color copied from the owning calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Derived hour count and owning calendar.
    pub extended_props: EventProps,
}

impl ShiftEvent {
    /// Returns the interval when both ends are present and `end > start`.
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end > start => Some((start, end)),
            _ => None,
        }
    }

    /// Id of the owning calendar.
    pub fn calendar_id(&self) -> &str {
        &self.extended_props.calendar_id
    }

    /// Cached hour count.
    pub fn hours(&self) -> Decimal {
        self.extended_props.hours
    }

    /// The user-entered part of the title.
    pub fn title(&self) -> EventTitle {
        EventTitle::from_composed(&self.title)
    }
}

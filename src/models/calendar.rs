//! Calendar model and pay settings.
//!
//! A calendar is a named bucket of shift events, usually one per job. Exactly
//! one calendar is of kind [`CalendarKind::General`]; it is never deleted and
//! never counted toward weekly job hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the protected general-purpose calendar.
pub const PERSONAL_CALENDAR_NAME: &str = "Personal";

/// Weekday index (Sunday = 0) on which pay weeks start: Thursday.
pub const DEFAULT_WEEK_START_DAY: u8 = 4;

/// Whether a calendar's events count toward weekly job hours.
///
/// # Example
///
/// ```
/// use workaholic_engine::models::CalendarKind;
///
/// let kind: CalendarKind = serde_json::from_str("\"general\"").unwrap();
/// assert_eq!(kind, CalendarKind::General);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    /// The protected personal calendar; excluded from job-hour totals.
    General,
    /// A job calendar; its events count toward the weekly limit.
    #[default]
    Job,
}

/// Pay-week settings carried by every calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaySettings {
    /// Weekday index (Sunday = 0 through Saturday = 6) a pay week starts on.
    pub week_start_day_of_week: u8,
    /// Optional per-calendar weekly hour limit.
    #[serde(default)]
    pub weekly_limit_hours: Option<Decimal>,
}

impl Default for PaySettings {
    fn default() -> Self {
        Self {
            week_start_day_of_week: DEFAULT_WEEK_START_DAY,
            weekly_limit_hours: None,
        }
    }
}

/// A named calendar that owns shift events.
///
/// # Example
///
/// ```
/// use workaholic_engine::models::{Calendar, CalendarKind};
///
/// let personal = Calendar::personal("personal", "Personal", "#a78bfa");
/// assert_eq!(personal.kind, CalendarKind::General);
/// assert!(personal.is_protected());
/// assert!(!personal.is_job());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hex color applied to the calendar's events.
    pub color: String,
    /// Whether the calendar's events are shown.
    pub enabled: bool,
    /// General or job calendar.
    #[serde(rename = "type", default)]
    pub kind: CalendarKind,
    /// Pay-week settings.
    #[serde(default)]
    pub pay: PaySettings,
}

impl Calendar {
    /// Builds the protected general calendar.
    pub fn personal(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            enabled: true,
            kind: CalendarKind::General,
            pay: PaySettings::default(),
        }
    }

    /// Builds an enabled job calendar with default pay settings.
    pub fn job(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            enabled: true,
            kind: CalendarKind::Job,
            pay: PaySettings::default(),
        }
    }

    /// Returns true when the calendar's events count toward job hours.
    ///
    /// The protected calendar never does, even when an older record without
    /// `type` loaded it as a job calendar.
    pub fn is_job(&self) -> bool {
        self.kind == CalendarKind::Job && !self.is_protected()
    }

    /// Returns true for the calendar that can never be deleted.
    ///
    /// Older records carry no `type`, so the name is honoured as well.
    pub fn is_protected(&self) -> bool {
        self.kind == CalendarKind::General || self.name == PERSONAL_CALENDAR_NAME
    }
}

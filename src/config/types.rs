//! Configuration types for the time-accounting engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file (or no file at all) is valid.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Calendar, DEFAULT_WEEK_START_DAY, PERSONAL_CALENDAR_NAME};

/// Colors handed out to new calendars, in order.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#a78bfa", "#34d399", "#60a5fa", "#f472b6", "#fb923c", "#facc15",
];

/// Weekly limit used when the store holds no limit slot.
pub const DEFAULT_WEEKLY_LIMIT_HOURS: i64 = 20;

/// The protected general calendar created on first start.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonalCalendarConfig {
    /// Stable id of the calendar.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hex color.
    pub color: String,
}

impl Default for PersonalCalendarConfig {
    fn default() -> Self {
        Self {
            id: "personal".to_string(),
            name: PERSONAL_CALENDAR_NAME.to_string(),
            color: DEFAULT_PALETTE[0].to_string(),
        }
    }
}

/// Names of the four store slots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Slot holding the calendar list.
    pub calendars: String,
    /// Slot holding the event list.
    pub events: String,
    /// Slot holding the selected week key.
    pub selected_week: String,
    /// Slot holding the weekly limit.
    pub weekly_limit: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            calendars: "workaholic_calendars".to_string(),
            events: "workaholic_events".to_string(),
            selected_week: "workaholic_selected_week".to_string(),
            weekly_limit: "workaholic_weekly_limit".to_string(),
        }
    }
}

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use workaholic_engine::config::EngineConfig;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.week_start_day_of_week, 4);
/// assert_eq!(config.default_weekly_limit_hours, Some(Decimal::new(20, 0)));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Weekday index (Sunday = 0) every pay week starts on.
    pub week_start_day_of_week: u8,
    /// Limit applied when the store has never held one; `null` disables it.
    pub default_weekly_limit_hours: Option<Decimal>,
    /// The protected calendar seeded into an empty store.
    pub personal_calendar: PersonalCalendarConfig,
    /// Colors cycled through for new calendars.
    pub palette: Vec<String>,
    /// Store slot names.
    pub storage_keys: StorageKeys,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            week_start_day_of_week: DEFAULT_WEEK_START_DAY,
            default_weekly_limit_hours: Some(Decimal::new(DEFAULT_WEEKLY_LIMIT_HOURS, 0)),
            personal_calendar: PersonalCalendarConfig::default(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            storage_keys: StorageKeys::default(),
        }
    }
}

impl EngineConfig {
    /// Checks the values the engine relies on.
    pub fn validate(&self) -> EngineResult<()> {
        if self.week_start_day_of_week > 6 {
            return Err(EngineError::InvalidConfig {
                field: "week_start_day_of_week".to_string(),
                message: format!(
                    "must be between 0 and 6, got {}",
                    self.week_start_day_of_week
                ),
            });
        }

        if let Some(limit) = self.default_weekly_limit_hours {
            if limit <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: "default_weekly_limit_hours".to_string(),
                    message: format!("must be positive, got {}", limit),
                });
            }
        }

        if self.palette.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "palette".to_string(),
                message: "must contain at least one color".to_string(),
            });
        }

        Ok(())
    }

    /// The calendar list a fresh store starts with.
    pub fn default_calendars(&self) -> Vec<Calendar> {
        let personal = &self.personal_calendar;
        vec![Calendar::personal(
            &personal.id,
            &personal.name,
            &personal.color,
        )]
    }
}

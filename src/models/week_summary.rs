//! Derived weekly outputs: limit warnings and the selected-week summary.
//!
//! Nothing here is persisted; every value is recomputed from the event and
//! calendar snapshots on each aggregation pass.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::exceeds_limit;

/// A pay week whose job hours strictly exceed the configured limit.
///
/// # Example
///
/// ```
/// use workaholic_engine::models::WeeklyWarning;
/// use rust_decimal::Decimal;
///
/// let warning = WeeklyWarning {
///     week_key: "2024-05-02".to_string(),
///     display_range: "May 2 – May 8".to_string(),
///     hours_worked: Decimal::new(22, 0),
///     limit: Decimal::new(20, 0),
/// };
/// assert_eq!(warning.excess(), Decimal::new(2, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyWarning {
    /// `YYYY-MM-DD` of the first day of the pay week.
    pub week_key: String,
    /// Human label such as `"May 2 – May 8"`.
    pub display_range: String,
    /// Total job hours in the week.
    pub hours_worked: Decimal,
    /// The limit that was exceeded.
    pub limit: Decimal,
}

impl WeeklyWarning {
    /// Hours worked beyond the limit.
    pub fn excess(&self) -> Decimal {
        self.hours_worked - self.limit
    }
}

/// Everything the display surfaces need for the selected pay week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    /// The selected week key.
    pub week_key: String,
    /// Human label for the selected week.
    pub display_range: String,
    /// Hours per calendar id in the selected week; every known calendar is present.
    pub hours_by_calendar: HashMap<String, Decimal>,
    /// Job-calendar hours in the selected week.
    pub job_hours: Decimal,
    /// The configured weekly limit, if any.
    pub weekly_limit: Option<Decimal>,
    /// Every over-limit week across history, most recent first.
    pub warnings: Vec<WeeklyWarning>,
}

impl WeekSummary {
    /// Hours for one calendar, zero when it has no events this week.
    pub fn hours_for(&self, calendar_id: &str) -> Decimal {
        self.hours_by_calendar
            .get(calendar_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Whether the selected week's job hours strictly exceed the limit.
    pub fn is_over_limit(&self) -> bool {
        exceeds_limit(self.job_hours, self.weekly_limit)
    }

    /// Hours left before the limit, floored at zero; `None` without a limit.
    pub fn remaining_hours(&self) -> Option<Decimal> {
        self.weekly_limit
            .map(|limit| (limit - self.job_hours).max(Decimal::ZERO))
    }
}

//! Weekly limit checking.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::WeeklyWarning;

use super::pay_week::{format_date_range, parse_week_key};

/// Whether `hours` strictly exceeds `limit`. No limit never exceeds.
pub fn exceeds_limit(hours: Decimal, limit: Option<Decimal>) -> bool {
    limit.is_some_and(|limit| hours > limit)
}

/// Lists every week whose job hours strictly exceed `limit`, most recent first.
///
/// `None` means no limit is configured and yields an empty list. Ordering is
/// by descending week key, which is chronological for `YYYY-MM-DD` keys.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use workaholic_engine::calculation::weekly_warnings;
/// use rust_decimal::Decimal;
///
/// let totals = HashMap::from([
///     ("2024-04-25".to_string(), Decimal::new(21, 0)),
///     ("2024-05-02".to_string(), Decimal::new(22, 0)),
///     ("2024-05-09".to_string(), Decimal::new(20, 0)),
/// ]);
///
/// let warnings = weekly_warnings(&totals, Some(Decimal::new(20, 0)));
/// let keys: Vec<&str> = warnings.iter().map(|w| w.week_key.as_str()).collect();
/// assert_eq!(keys, vec!["2024-05-02", "2024-04-25"]);
///
/// assert!(weekly_warnings(&totals, None).is_empty());
/// ```
pub fn weekly_warnings(
    totals: &HashMap<String, Decimal>,
    limit: Option<Decimal>,
) -> Vec<WeeklyWarning> {
    let Some(limit) = limit else {
        return Vec::new();
    };

    let mut warnings: Vec<WeeklyWarning> = totals
        .iter()
        .filter(|(_, hours)| **hours > limit)
        .map(|(week_key, hours)| WeeklyWarning {
            week_key: week_key.clone(),
            display_range: parse_week_key(week_key)
                .map(format_date_range)
                .unwrap_or_else(|| week_key.clone()),
            hours_worked: *hours,
            limit,
        })
        .collect();

    warnings.sort_by(|a, b| b.week_key.cmp(&a.week_key));
    debug!(count = warnings.len(), limit = %limit, "Computed weekly limit warnings");
    warnings
}

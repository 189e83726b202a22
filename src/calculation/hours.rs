//! Hour counting for shift intervals.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Rounds to two decimal places, halves away from zero.
///
/// # Example
///
/// ```
/// use workaholic_engine::calculation::round2;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round2(Decimal::new(1005, 3)), Decimal::new(101, 2)); // 1.005 -> 1.01
/// assert_eq!(round2(Decimal::new(-1005, 3)), Decimal::new(-101, 2));
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the length of `[start, end)` in hours, rounded to two decimals.
///
/// A non-positive interval yields zero or a negative count; callers treat
/// those as invalid.
///
/// # Example
///
/// ```
/// use workaholic_engine::calculation::calculate_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2024-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-01 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(calculate_hours(start, end), Decimal::new(8, 0));
/// ```
pub fn calculate_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let millis = (end - start).num_milliseconds();
    round2(Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR))
}

/// Whether `[start, end)` has a strictly positive length.
pub fn is_positive_interval(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    end > start
}

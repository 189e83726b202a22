//! Pay-week partitioning.
//!
//! A pay week is a fixed seven-day window starting at local midnight on a
//! configured weekday (Thursday by default). Weeks are identified by a
//! `YYYY-MM-DD` key of their first day, which sorts chronologically as a
//! plain string.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// `strftime` pattern for week keys.
pub const WEEK_KEY_FORMAT: &str = "%Y-%m-%d";

/// Returns local midnight on the first day of the pay week containing `instant`.
///
/// `week_start_day_of_week` counts from Sunday = 0. The result is never after
/// `instant` and is less than seven days before it.
///
/// # Example
///
/// ```
/// use workaholic_engine::calculation::start_of_pay_week;
/// use chrono::NaiveDateTime;
///
/// // 2024-05-06 is a Monday; its Thursday-start week began 2024-05-02
/// let monday = NaiveDateTime::parse_from_str("2024-05-06 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let start = start_of_pay_week(monday, 4);
/// assert_eq!(start.to_string(), "2024-05-02 00:00:00");
/// ```
pub fn start_of_pay_week(instant: NaiveDateTime, week_start_day_of_week: u8) -> NaiveDateTime {
    pay_week_start_date(instant.date(), week_start_day_of_week).and_time(NaiveTime::MIN)
}

/// Date-only form of [`start_of_pay_week`].
pub fn pay_week_start_date(date: NaiveDate, week_start_day_of_week: u8) -> NaiveDate {
    let day_of_week = i64::from(date.weekday().num_days_from_sunday());
    let offset = (day_of_week - i64::from(week_start_day_of_week)).rem_euclid(7);
    date - Days::new(offset.unsigned_abs())
}

/// Formats the calendar day of `instant` as a week key.
///
/// # Example
///
/// ```
/// use workaholic_engine::calculation::week_key;
/// use chrono::NaiveDateTime;
///
/// let instant = NaiveDateTime::parse_from_str("2024-05-02 23:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(week_key(instant), "2024-05-02");
/// ```
pub fn week_key(instant: NaiveDateTime) -> String {
    instant.date().format(WEEK_KEY_FORMAT).to_string()
}

/// Key of the pay week containing `instant`.
pub fn pay_week_key(instant: NaiveDateTime, week_start_day_of_week: u8) -> String {
    week_key(start_of_pay_week(instant, week_start_day_of_week))
}

/// Parses a week key back into the date it names.
pub fn parse_week_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, WEEK_KEY_FORMAT).ok()
}

/// Moves a week key by `weeks` whole weeks (negative moves back).
///
/// Returns `None` when the key is malformed or the result is out of range.
///
/// # Example
///
/// ```
/// use workaholic_engine::calculation::shift_week_key;
///
/// assert_eq!(shift_week_key("2024-05-02", -1).as_deref(), Some("2024-04-25"));
/// assert_eq!(shift_week_key("2024-12-26", 1).as_deref(), Some("2025-01-02"));
/// assert_eq!(shift_week_key("not-a-date", 1), None);
/// ```
pub fn shift_week_key(key: &str, weeks: i64) -> Option<String> {
    let date = parse_week_key(key)?;
    let shifted = date.checked_add_signed(TimeDelta::try_weeks(weeks)?)?;
    Some(shifted.format(WEEK_KEY_FORMAT).to_string())
}

/// Labels the week starting at `week_start` as `"May 2 – May 8"`.
///
/// The year is not shown, so a range spanning New Year reads `"Dec 28 – Jan 3"`.
pub fn format_range(week_start: NaiveDateTime) -> String {
    format_date_range(week_start.date())
}

/// Date-only form of [`format_range`].
pub fn format_date_range(week_start: NaiveDate) -> String {
    let week_end = week_start + Days::new(6);
    format!("{} – {}", week_start.format("%b %-d"), week_end.format("%b %-d"))
}

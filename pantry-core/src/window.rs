use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::CoreError;

/// Half-open creation-time window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpenseWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ExpenseWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The 24 hours starting at `start`, if the end is representable.
    pub fn day_starting(start: DateTime<Utc>) -> Option<Self> {
        let end = start.checked_add_signed(Duration::days(1))?;
        Some(Self::new(start, end))
    }

    /// Window for a client-supplied date.
    ///
    /// A bare `YYYY-MM-DD` starts at that day's UTC midnight; an RFC 3339
    /// timestamp starts at the given instant.
    pub fn for_date(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let invalid = || CoreError::InvalidDate(input.to_string());

        let start = match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?.and_utc(),
            Err(_) => DateTime::parse_from_rfc3339(trimmed)
                .map_err(|_| invalid())?
                .with_timezone(&Utc),
        };

        Self::day_starting(start).ok_or_else(invalid)
    }

    /// `days` calendar days ending at `now`, i.e. `[now - (days - 1), now)`.
    ///
    /// `None` when the start would fall before the earliest representable date.
    pub fn trailing_days(now: DateTime<Utc>, days: u32) -> Option<Self> {
        let back = Duration::try_days(i64::from(days.saturating_sub(1)))?;
        let start = now.checked_sub_signed(back)?;
        Some(Self::new(start, now))
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_for_date_plain_date() {
        let window = ExpenseWindow::for_date("2024-12-25").unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 12, 26, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_for_date_rfc3339_offset() {
        let window = ExpenseWindow::for_date("2024-12-25T10:30:00+05:30").unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 12, 25, 5, 0, 0).unwrap());
        assert_eq!(window.end - window.start, Duration::days(1));
    }

    #[test]
    fn test_for_date_rejects_garbage() {
        assert!(matches!(
            ExpenseWindow::for_date("next tuesday"),
            Err(CoreError::InvalidDate(_))
        ));
        assert!(ExpenseWindow::for_date("2024-02-30").is_err());
    }

    #[test]
    fn test_for_date_last_representable_day_is_invalid() {
        // Parses, but the day after it cannot be represented
        assert!(matches!(
            ExpenseWindow::for_date("+262142-12-31"),
            Err(CoreError::InvalidDate(d)) if d == "+262142-12-31"
        ));
        assert!(ExpenseWindow::for_date("+262143-12-31").is_err());
        assert!(ExpenseWindow::day_starting(DateTime::<Utc>::MAX_UTC).is_none());
    }

    #[test]
    fn test_window_is_half_open() {
        let window = ExpenseWindow::for_date("2024-01-10").unwrap();

        assert!(window.contains(window.start));
        assert!(window.contains(window.end - Duration::milliseconds(1)));
        assert!(!window.contains(window.end));
        assert!(!window.contains(window.start - Duration::milliseconds(1)));
    }

    #[test]
    fn test_trailing_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 20, 15, 45, 0).unwrap();
        let window = ExpenseWindow::trailing_days(now, 10).unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 6, 11, 15, 45, 0).unwrap());
        assert_eq!(window.end, now);
        assert!(!window.contains(now));
    }

    #[test]
    fn test_trailing_zero_days_is_empty() {
        let now = Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap();
        let window = ExpenseWindow::trailing_days(now, 0).unwrap();
        assert_eq!(window.start, window.end);
    }

    #[test]
    fn test_trailing_days_past_earliest_date() {
        let now = Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap();
        assert!(ExpenseWindow::trailing_days(now, u32::MAX).is_none());
    }
}

use chrono::{Days, NaiveDate};

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8 {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d") {
            return Ok(d);
        }
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// The calendar date `offset` whole days before `as_of`
pub(crate) fn days_before(as_of: NaiveDate, offset: u64) -> Result<NaiveDate, AppError> {
    as_of
        .checked_sub_days(Days::new(offset))
        .ok_or(AppError::OffsetOutOfRange { offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_date_dashed() {
        assert_eq!(parse_date("2025-01-05").unwrap(), date(2025, 1, 5));
    }

    #[test]
    fn parse_date_compact() {
        assert_eq!(parse_date("20250105").unwrap(), date(2025, 1, 5));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2025-13-40").is_err());
    }

    #[test]
    fn days_before_standard_offsets() {
        let as_of = date(2024, 3, 10);
        assert_eq!(days_before(as_of, 2).unwrap(), date(2024, 3, 8));
        assert_eq!(days_before(as_of, 3).unwrap(), date(2024, 3, 7));
        assert_eq!(days_before(as_of, 4).unwrap(), date(2024, 3, 6));
    }

    #[test]
    fn days_before_crosses_month_and_year() {
        assert_eq!(days_before(date(2025, 1, 5), 4).unwrap(), date(2025, 1, 1));
        assert_eq!(days_before(date(2025, 1, 1), 2).unwrap(), date(2024, 12, 30));
    }

    #[test]
    fn days_before_leap_day() {
        assert_eq!(days_before(date(2024, 3, 1), 2).unwrap(), date(2024, 2, 28));
    }

    #[test]
    fn days_before_zero_is_identity() {
        let as_of = date(2024, 3, 10);
        assert_eq!(days_before(as_of, 0).unwrap(), as_of);
    }
}

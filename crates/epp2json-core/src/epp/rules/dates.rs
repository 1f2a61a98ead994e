//! Timestamp parsing for EPP date fields.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::timestamp::unset_instant;

/// Length of an EPP timestamp (`YYYYMMDDHHMMSS`).
const TIMESTAMP_LEN: usize = 14;

/// Parse an EPP timestamp in `YYYYMMDDHHMMSS` form.
///
/// Returns `None` for anything that is not exactly 14 ASCII digits forming a
/// valid calendar date and time. The zero instant `00010101000000` is unset
/// too.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    if value.len() != TIMESTAMP_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let number = |range: std::ops::Range<usize>| value[range].parse::<u32>().ok();

    let year = i32::try_from(number(0..4)?).ok()?;
    NaiveDate::from_ymd_opt(year, number(4..6)?, number(6..8)?)?
        .and_hms_opt(number(8..10)?, number(10..12)?, number(12..14)?)
        .filter(|ts| *ts != unset_instant())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_full_timestamp() {
        assert_eq!(
            parse_date("20230615143000"),
            Some(at(2023, 6, 15, 14, 30, 0))
        );
        assert_eq!(
            parse_date("20240101000000"),
            Some(at(2024, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_wrong_length_is_unset() {
        assert_eq!(parse_date("abc"), None);
        assert_eq!(parse_date("2023061514300"), None);
        assert_eq!(parse_date("202306151430000"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_invalid_calendar_values_are_unset() {
        assert_eq!(parse_date("20231315143000"), None);
        assert_eq!(parse_date("20230230120000"), None);
        assert_eq!(parse_date("20230615250000"), None);
        assert_eq!(parse_date("20230615143060"), None);
    }

    #[test]
    fn test_zero_instant_is_unset() {
        assert_eq!(parse_date("00010101000000"), None);
        assert_eq!(parse_date("00010101000001"), Some(at(1, 1, 1, 0, 0, 1)));
    }

    #[test]
    fn test_non_digits_are_unset() {
        assert_eq!(parse_date("2023-06-15 1430"), None);
        assert_eq!(parse_date("2023061514300a"), None);
        assert_eq!(parse_date("+2023061514300"), None);
    }
}

use chrono::{NaiveDate, Timelike};
use todoist_client::utils::datetime::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2023-12-25").unwrap(), NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
    assert!(parse_date("25/12/2023").is_err());
}

#[test]
fn test_parse_rfc3339_keeps_offset() {
    let dt = parse_rfc3339("2016-09-01T12:00:00.000000Z").unwrap();
    assert_eq!(dt.hour(), 12);

    let dt = parse_rfc3339("2025-01-15T14:30:00+02:00").unwrap();
    assert_eq!(dt.offset().local_minus_utc(), 7200);
}

#[test]
fn test_parse_rfc3339_rejects_floating_time() {
    assert!(parse_rfc3339("2025-01-15T14:30:00").is_err());
    assert!(parse_rfc3339("").is_err());
}

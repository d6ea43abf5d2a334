#![cfg(feature = "chrono")]

use chrono::{FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};
use lxfmt::{format_date_time, format_duration, Duration};

#[test]
fn test_fixed_offset_date_time() {
    let zone = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let dt = zone.with_ymd_and_hms(2017, 3, 12, 7, 8, 9).unwrap();
    assert_eq!(
        format_date_time(&dt, "yyyy-MM-dd'T'HH:mm:ssZZ").unwrap(),
        "2017-03-12T07:08:09+05:30"
    );
    assert_eq!(format_date_time(&dt, "z").unwrap(), "UTC+5:30");
    assert_eq!(format_date_time(&dt, "EEE o WW").unwrap(), "Sun 71 10");
}

#[test]
fn test_utc_date_time() {
    let dt = Utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 0).unwrap();
    assert_eq!(format_date_time(&dt, "HH:mmZZ").unwrap(), "23:59Z");
    assert_eq!(format_date_time(&dt, "kkkk-'W'WW").unwrap(), "2020-W53");
}

#[test]
fn test_naive_date_time_is_utc() {
    let dt = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_milli_opt(0, 0, 0, 250)
        .unwrap();
    assert_eq!(format_date_time(&dt, "h:mm:ss.SSS a ZZ").unwrap(), "12:00:00.250 AM Z");
    assert_eq!(format_date_time(&dt, "kkkk WW").unwrap(), "2022 52");
}

#[test]
fn test_time_delta_durations() {
    let dur = Duration::from(TimeDelta::seconds(3909));
    assert_eq!(format_duration(&dur, "hh:mm:ss").unwrap(), "01:05:09");
    assert_eq!(format_duration(&dur, "m").unwrap(), "65");
}

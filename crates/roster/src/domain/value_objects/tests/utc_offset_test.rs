use crate::domain::value_objects::UtcOffset;
use chrono::{NaiveDate, TimeZone, Utc};

#[test]
fn test_offset_display() {
    assert_eq!(UtcOffset::from_minutes(330).unwrap().to_string(), "+05:30");
    assert_eq!(UtcOffset::from_minutes(-300).unwrap().to_string(), "-05:00");
    assert_eq!(UtcOffset::utc().to_string(), "+00:00");
}

#[test]
fn test_offset_parsing() {
    assert_eq!("+09:00".parse::<UtcOffset>().unwrap().total_minutes(), 540);
    assert_eq!("-03:30".parse::<UtcOffset>().unwrap().total_minutes(), -210);
    assert!("09:00".parse::<UtcOffset>().is_err());
    assert!("+09:75".parse::<UtcOffset>().is_err());
}

#[test]
fn test_offset_out_of_range() {
    assert!(UtcOffset::from_minutes(24 * 60).is_err());
}

#[test]
fn test_local_time_crosses_midnight() {
    let tokyo = UtcOffset::from_minutes(540).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 20, 0, 0).unwrap();

    assert_eq!(
        tokyo.local_time(now).date(),
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    );
}

#[test]
fn test_offset_serialization() {
    let offset = UtcOffset::from_minutes(-300).unwrap();
    let json = serde_json::to_string(&offset).unwrap();

    assert_eq!(json, "\"-05:00\"");
    assert_eq!(serde_json::from_str::<UtcOffset>(&json).unwrap(), offset);
}

use chrono::{NaiveDate, Utc};
use verific_types::*;

#[test]
fn test_instant_from_nested_field() {
    let record = serde_json::json!({
        "id": "reg-1",
        "activity": { "startsAt": "2024-03-10T08:00:00-03:00" }
    });
    let value = lookup_path(&record, "activity.startsAt").expect("field present");
    let dt = instant_from_value(value, &Utc).unwrap();
    assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
}

#[test]
fn test_error_messages_name_the_input() {
    let err = parse_instant("15/01/2024", &Utc).unwrap_err();
    assert!(err.to_string().contains("15/01/2024"));

    let err = Error::InvalidDate {
        index: 3,
        reason: "missing field 'startsAt'".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid date for item 3: missing field 'startsAt'"
    );
}

#[test]
fn test_parse_tz_and_convert() {
    let tz = parse_tz("Europe/Lisbon").unwrap();
    let dt = parse_instant("2024-07-01T23:30:00Z", &tz).unwrap();
    // Lisbon is UTC+1 in summer
    assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2024, 7, 2).unwrap());
}

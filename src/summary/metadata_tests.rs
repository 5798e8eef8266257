use super::*;
use std::path::PathBuf;

#[test]
fn test_customer_name_after_customers_segment() {
    let dir = Path::new("/home/dustin/Documents/Kong/Customers/Acme/2024-01-15");
    assert_eq!(extract_customer_name(dir), "Acme");
}

#[test]
fn test_customer_name_deeper_nesting() {
    let dir = Path::new("/x/Customers/Acme Corp/q1/2024-01-15");
    assert_eq!(extract_customer_name(dir), "Acme Corp");
}

#[test]
fn test_customer_name_falls_back_to_parent() {
    let dir = Path::new("/tmp/meeting1/2024-02-01");
    assert_eq!(extract_customer_name(dir), "meeting1");
}

#[test]
fn test_customer_name_trailing_customers_falls_back() {
    let dir = Path::new("/data/Customers");
    assert_eq!(extract_customer_name(dir), "data");
}

#[test]
fn test_customer_name_segment_must_match_exactly() {
    let dir = Path::new("/data/MyCustomers/Acme/2024-01-15");
    assert_eq!(extract_customer_name(dir), "Acme");
    let dir = Path::new("/data/OldCustomers/2024-01-15");
    assert_eq!(extract_customer_name(dir), "OldCustomers");
}

#[test]
fn test_customer_name_keeps_special_characters() {
    let dir = Path::new("/x/Customers/ACME & Sons, Inc./2024-01-15");
    let meta = ExtractedMetadata::from_meeting_dir(dir);
    assert_eq!(meta.customer_name, "ACME & Sons, Inc.");
    assert_eq!(meta.customer_name_upper, "ACME & SONS, INC.");
}

#[test]
fn test_customer_name_root_is_empty() {
    assert_eq!(extract_customer_name(Path::new("/")), "");
}

#[test]
fn test_meeting_date_from_last_segment() {
    let dir = Path::new("/x/Customers/Acme/2024-01-15");
    let date = extract_meeting_date(dir).unwrap();
    assert_eq!(date.to_string(), "2024-01-15");
}

#[test]
fn test_meeting_date_first_valid_segment_wins() {
    let dir = Path::new("/x/2023-12-31/Customers/Acme/2024-01-15");
    let date = extract_meeting_date(dir).unwrap();
    assert_eq!(date.to_string(), "2023-12-31");
}

#[test]
fn test_meeting_date_skips_invalid_calendar_date() {
    let dir = Path::new("/x/2024-02-30/2024-03-01");
    let date = extract_meeting_date(dir).unwrap();
    assert_eq!(date.to_string(), "2024-03-01");
}

#[test]
fn test_meeting_date_absent() {
    assert!(extract_meeting_date(Path::new("/x/Customers/Acme/notes")).is_none());
    assert!(extract_meeting_date(Path::new("/x/Customers/Acme/2024-1-15")).is_none());
    assert!(extract_meeting_date(Path::new("/x/Customers/Acme/15-01-2024")).is_none());
    assert!(extract_meeting_date(Path::new("/x/2024-01-15-kickoff")).is_none());
}

#[test]
fn test_meeting_date_leap_day() {
    assert!(MeetingDate::parse_strict("2024-02-29").is_some());
    assert!(MeetingDate::parse_strict("2023-02-29").is_none());
}

#[test]
fn test_parse_strict_rejects_non_digit_fields() {
    assert!(MeetingDate::parse_strict("+202-01-15").is_none());
    assert!(MeetingDate::parse_strict("2024/01/15").is_none());
    assert!(MeetingDate::parse_strict("2024-01- 5").is_none());
    assert!(MeetingDate::parse_strict("2024-13-01").is_none());
    assert!(MeetingDate::parse_strict("").is_none());
}

#[test]
fn test_date_label() {
    let dated = ExtractedMetadata::from_meeting_dir(Path::new("/x/Customers/Acme/2024-01-15"));
    assert_eq!(dated.date_label(), "2024-01-15");

    let undated = ExtractedMetadata::from_meeting_dir(Path::new("/x/Customers/Acme/kickoff"));
    assert_eq!(undated.date_label(), UNDATED_LABEL);
}

#[test]
fn test_extraction_is_pure() {
    let dir = PathBuf::from("/x/Customers/Acme/2024-01-15");
    let first = ExtractedMetadata::from_meeting_dir(&dir);
    let second = ExtractedMetadata::from_meeting_dir(&dir);
    assert_eq!(first, second);
}

#[test]
fn test_meeting_dates_order_chronologically() {
    let earlier = MeetingDate::parse_strict("2024-01-15").unwrap();
    let later = MeetingDate::parse_strict("2024-11-02").unwrap();
    assert!(earlier < later);
}

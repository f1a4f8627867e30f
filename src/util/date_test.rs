use super::*;

#[test]
fn format_date_handles_rfc3339() {
    assert_eq!(format_date("2025-03-07T09:05:01Z"), "07/03/2025, 09:05:01");
    assert_eq!(format_date("2025-03-07T09:05:01+08:00"), "07/03/2025, 09:05:01");
}

#[test]
fn format_date_handles_naive_with_fraction() {
    assert_eq!(format_date("2025-12-31T23:59:58.123456"), "31/12/2025, 23:59:58");
}

#[test]
fn format_date_handles_space_separator() {
    assert_eq!(format_date("2025-01-02 08:00:00"), "02/01/2025, 08:00:00");
}

#[test]
fn format_date_falls_back_to_raw_input() {
    assert_eq!(format_date("tomorrow-ish"), "tomorrow-ish");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2025-13-40T99:00:00"), "2025-13-40T99:00:00");
}

#[test]
fn format_date_rejects_non_numeric_fraction() {
    assert_eq!(format_date("2025-01-01T10:00:00.garbage"), "2025-01-01T10:00:00.garbage");
    assert_eq!(format_date("2025-01-01T10:00:00."), "2025-01-01T10:00:00.");
    assert_eq!(format_date("2025-01-01T10:00:00.5.5"), "2025-01-01T10:00:00.5.5");
}

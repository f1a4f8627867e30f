use futures::executor::block_on;

use super::*;
use crate::config::{SIGNIN_PAGE, TOKEN_KEY};
use crate::net::test_support::harness;
use crate::net::transport::Method;
use crate::net::types::SeatType;

#[test]
fn reservation_endpoint_formats_expected_path() {
    assert_eq!(reservation_endpoint(42), "/api/reservations/42");
}

#[test]
fn login_stores_token_and_normalizes_email() {
    let h = harness();
    h.transport.reply(200, r#"{"token":"fresh"}"#);
    block_on(h.client.login("  Ana@Example.EDU ", "secret1")).expect("login");

    assert_eq!(h.local.get(TOKEN_KEY).as_deref(), Some("fresh"));
    let sent = &h.transport.sent()[0];
    assert_eq!(sent.url, "http://api.test/api/auth/login");
    assert_eq!(sent.method, Method::Post);
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap_or_default()).expect("json body");
    assert_eq!(body["email"], "ana@example.edu");
    assert_eq!(body["password"], "secret1");
}

#[test]
fn login_rejected_credentials_fail_without_redirect() {
    let h = harness();
    h.transport.reply(401, r#"{"detail":"Invalid credentials"}"#);
    let result = block_on(h.client.login("a@b.c", "wrong"));
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(h.local.get(TOKEN_KEY), None);
    assert!(h.navigator.targets().is_empty());
}

#[test]
fn login_other_failures_surface_as_status() {
    let h = harness();
    h.transport.reply(422, r#"{"detail":"bad email"}"#);
    assert_eq!(block_on(h.client.login("x", "y")), Err(ApiError::Status(422)));
    assert!(h.navigator.targets().is_empty());
}

#[test]
fn guarded_calls_still_redirect_on_401() {
    let h = harness();
    h.local.set(TOKEN_KEY, "stale");
    h.transport.reply(401, "");
    assert_eq!(block_on(h.client.list_seats()), Err(ApiError::Unauthorized));
    assert_eq!(h.navigator.targets(), vec![SIGNIN_PAGE.to_owned()]);
}

#[test]
fn list_seats_decodes_listing() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.transport.reply(
        200,
        r#"[{"id":1,"seat_code":"A01","seat_type":"standard","status":"available"},
            {"id":2,"seat_code":"A02","seat_type":"accessible","status":"booked"}]"#,
    );
    let seats = block_on(h.client.list_seats()).expect("seats");
    assert_eq!(seats.len(), 2);
    assert_eq!(seats[1].seat_type, SeatType::Accessible);
    assert_eq!(h.transport.sent()[0].header("Authorization"), Some("Bearer t"));
}

#[test]
fn create_reservation_reports_conflict_status() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.transport.reply(409, r#"{"detail":"Seat already booked"}"#);
    let result = block_on(h.client.create_reservation("A02"));
    assert_eq!(result, Err(ApiError::Status(409)));
    assert_eq!(h.client.token(), Some("t".to_owned()));
}

#[test]
fn create_reservation_decodes_record() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.transport.reply(
        200,
        r#"{"id":9,"seat_code":"A01","seat_type":"standard","status":"active",
            "start_time":"2025-03-01T10:00:00","end_time":null,"created_at":"2025-03-01T10:00:00"}"#,
    );
    let reservation = block_on(h.client.create_reservation("A01")).expect("reservation");
    assert_eq!(reservation.id, 9);
    assert_eq!(
        h.transport.sent()[0].body.as_deref(),
        Some(r#"{"seat_code":"A01"}"#)
    );
}

#[test]
fn my_reservations_and_cancel_hit_expected_paths() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.transport.reply(200, "[]");
    h.transport.reply(200, r#"{"ok":true}"#);
    assert_eq!(block_on(h.client.my_reservations()), Ok(Vec::new()));
    assert_eq!(block_on(h.client.cancel_reservation(3)), Ok(()));
    let urls: Vec<String> = h.transport.sent().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "http://api.test/api/reservations/mine".to_owned(),
            "http://api.test/api/reservations/3".to_owned(),
        ]
    );
}

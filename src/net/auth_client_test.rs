use futures::executor::block_on;

use super::*;
use crate::config::SIGNIN_PAGE;
use crate::net::test_support::harness;
use crate::net::transport::Method;

const USER_JSON: &str = r#"{"id":5,"name":"Ana","email":"ana@example.edu","created_at":"2025-02-01T08:00:00"}"#;

// =============================================================
// require_auth
// =============================================================

#[test]
fn require_auth_without_token_redirects_and_skips_network() {
    let h = harness();
    let result = h.client.require_auth();
    assert_eq!(result, Err(ApiError::MissingToken));
    assert_eq!(h.navigator.targets(), vec![SIGNIN_PAGE.to_owned()]);
    assert!(h.transport.sent().is_empty());
}

#[test]
fn require_auth_with_token_returns_it() {
    let h = harness();
    h.local.set(TOKEN_KEY, "tok-1");
    assert_eq!(h.client.require_auth(), Ok("tok-1".to_owned()));
    assert!(h.navigator.targets().is_empty());
}

#[test]
fn empty_token_counts_as_missing() {
    let h = harness();
    h.local.set(TOKEN_KEY, "");
    assert_eq!(h.client.token(), None);
    assert_eq!(h.client.require_auth(), Err(ApiError::MissingToken));
}

// =============================================================
// request headers
// =============================================================

#[test]
fn request_attaches_bearer_header_when_token_present() {
    let h = harness();
    h.local.set(TOKEN_KEY, "abc123");
    h.transport.reply(200, "{}");
    block_on(h.client.request("/api/seats", RequestOptions::get())).expect("request");

    let sent = h.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "http://api.test/api/seats");
    assert_eq!(sent[0].header("Authorization"), Some("Bearer abc123"));
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
}

#[test]
fn request_without_token_omits_authorization() {
    let h = harness();
    h.transport.reply(200, "[]");
    block_on(h.client.request("/api/seats", RequestOptions::get())).expect("request");
    assert_eq!(h.transport.sent()[0].header("Authorization"), None);
}

#[test]
fn bearer_header_overrides_caller_authorization() {
    let h = harness();
    h.local.set(TOKEN_KEY, "real");
    let opts = RequestOptions {
        headers: vec![("authorization".to_owned(), "Basic nope".to_owned())],
        ..RequestOptions::get()
    };
    let req = h.client.build_request("/x", opts);
    assert_eq!(req.header("Authorization"), Some("Bearer real"));
    assert_eq!(req.headers.iter().filter(|(k, _)| k.eq_ignore_ascii_case("authorization")).count(), 1);
}

#[test]
fn caller_headers_replace_content_type_default() {
    let h = harness();
    let opts = RequestOptions {
        headers: vec![("content-type".to_owned(), "text/plain".to_owned())],
        ..RequestOptions::get()
    };
    let req = h.client.build_request("/upload", opts);
    assert_eq!(req.header("Content-Type"), Some("text/plain"));
    assert_eq!(req.headers.len(), 1);
}

#[test]
fn request_forwards_method_and_body() {
    let h = harness();
    h.transport.reply(201, "{}");
    let opts = RequestOptions::post_json(&serde_json::json!({ "seat_code": "A01" })).expect("serialize");
    block_on(h.client.request("/api/reservations", opts)).expect("request");
    let sent = &h.transport.sent()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.body.as_deref(), Some(r#"{"seat_code":"A01"}"#));
}

// =============================================================
// status handling
// =============================================================

#[test]
fn unauthorized_clears_token_redirects_and_fails() {
    let h = harness();
    h.local.set(TOKEN_KEY, "stale");
    h.transport.reply(401, r#"{"detail":"Invalid token"}"#);

    let result = block_on(h.client.request("/api/reservations/mine", RequestOptions::get()));
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert!(!h.local.contains(TOKEN_KEY));
    assert_eq!(h.navigator.targets(), vec![SIGNIN_PAGE.to_owned()]);
}

#[test]
fn unauthorized_is_handled_for_every_path() {
    for path in ["/api/auth/me", "/api/seats", "/api/reservations", "/anything/else"] {
        let h = harness();
        h.local.set(TOKEN_KEY, "t");
        h.transport.reply(401, "");
        let result = block_on(h.client.request(path, RequestOptions::get()));
        assert_eq!(result, Err(ApiError::Unauthorized), "path {path}");
        assert_eq!(h.client.token(), None, "path {path}");
        assert_eq!(h.navigator.targets().len(), 1, "path {path}");
    }
}

#[test]
fn other_statuses_pass_through_unchanged() {
    for status in [200, 204, 400, 403, 404, 409, 500] {
        let h = harness();
        h.local.set(TOKEN_KEY, "t");
        h.transport.reply(status, "body");
        let resp = block_on(h.client.request("/api/seats", RequestOptions::get())).expect("passthrough");
        assert_eq!(resp, ApiResponse::new(status, "body"));
        assert_eq!(h.client.token(), Some("t".to_owned()));
        assert!(h.navigator.targets().is_empty());
    }
}

#[test]
fn transport_failure_propagates_without_redirect() {
    let h = harness();
    h.transport.fail(ApiError::Network("offline".to_owned()));
    let result = block_on(h.client.request("/api/seats", RequestOptions::get()));
    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
    assert!(h.navigator.targets().is_empty());
}

#[test]
fn get_json_maps_non_success_to_status_error() {
    let h = harness();
    h.transport.reply(404, r#"{"detail":"nope"}"#);
    let result: Result<serde_json::Value, _> = block_on(h.client.get_json("/api/missing"));
    assert_eq!(result, Err(ApiError::Status(404)));
}

#[test]
fn delete_succeeds_on_2xx() {
    let h = harness();
    h.transport.reply(200, r#"{"ok":true}"#);
    assert_eq!(block_on(h.client.delete("/api/reservations/3")), Ok(()));
    assert_eq!(h.transport.sent()[0].method, Method::Delete);
}

#[test]
fn set_token_drops_cached_identity() {
    let h = harness();
    h.session.set(CURRENT_USER_CACHE_KEY, USER_JSON);
    h.client.set_token("new");
    assert_eq!(h.client.token(), Some("new".to_owned()));
    assert!(!h.session.contains(CURRENT_USER_CACHE_KEY));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_token_and_identity_cache() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.session.set(CURRENT_USER_CACHE_KEY, USER_JSON);
    h.client.logout();
    assert!(!h.local.contains(TOKEN_KEY));
    assert!(!h.session.contains(CURRENT_USER_CACHE_KEY));
    assert_eq!(h.navigator.targets(), vec![SIGNIN_PAGE.to_owned()]);
}

// =============================================================
// fetch_current_user
// =============================================================

#[test]
fn fetch_current_user_serves_cache_without_network() {
    let h = harness();
    h.session.set(CURRENT_USER_CACHE_KEY, USER_JSON);
    let user = block_on(h.client.fetch_current_user(false)).expect("cached user");
    assert_eq!(user.name, "Ana");
    assert!(h.transport.sent().is_empty());
}

#[test]
fn fetch_current_user_force_bypasses_cache() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.session.set(CURRENT_USER_CACHE_KEY, USER_JSON);
    h.transport.reply(200, r#"{"id":6,"name":"Ben","email":"ben@example.edu"}"#);

    let user = block_on(h.client.fetch_current_user(true)).expect("fresh user");
    assert_eq!(user.id, 6);
    assert_eq!(h.transport.sent().len(), 1);
    assert_eq!(h.transport.sent()[0].url, "http://api.test/api/auth/me");
    let cached: CurrentUser = load_json(&h.session, CURRENT_USER_CACHE_KEY).expect("cache updated");
    assert_eq!(cached.name, "Ben");
}

#[test]
fn fetch_current_user_without_token_returns_none_offline() {
    let h = harness();
    assert_eq!(block_on(h.client.fetch_current_user(false)), None);
    assert!(h.transport.sent().is_empty());
}

#[test]
fn fetch_current_user_ignores_malformed_cache() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.session.set(CURRENT_USER_CACHE_KEY, "{broken");
    h.transport.reply(200, USER_JSON);
    let user = block_on(h.client.fetch_current_user(false)).expect("refetched user");
    assert_eq!(user.id, 5);
}

#[test]
fn fetch_current_user_does_not_cache_failures() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.transport.reply(500, USER_JSON);
    assert_eq!(block_on(h.client.fetch_current_user(false)), None);
    assert!(!h.session.contains(CURRENT_USER_CACHE_KEY));
}

#[test]
fn fetch_current_user_swallows_parse_errors() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.transport.reply(200, "not json");
    assert_eq!(block_on(h.client.fetch_current_user(false)), None);
    assert!(!h.session.contains(CURRENT_USER_CACHE_KEY));
}

#[test]
fn fetch_current_user_swallows_network_errors() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.transport.fail(ApiError::Network("offline".to_owned()));
    assert_eq!(block_on(h.client.fetch_current_user(false)), None);
}

#[test]
fn fetch_current_user_on_401_logs_out_and_returns_none() {
    let h = harness();
    h.local.set(TOKEN_KEY, "t");
    h.transport.reply(401, "");
    assert_eq!(block_on(h.client.fetch_current_user(false)), None);
    assert_eq!(h.client.token(), None);
    assert_eq!(h.navigator.targets(), vec![SIGNIN_PAGE.to_owned()]);
}

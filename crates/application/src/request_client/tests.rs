use std::sync::Arc;

use http::Method;
use permitdesk_core::AppError;
use serde_json::{Value, json};

use super::{NO_BODY, RequestClient, RequestOptions};
use crate::multipart::{Attachment, MultipartForm};
use crate::test_support::{FakeCredentialStore, FakeTransport, client_with};

fn fixture(signed_in: bool) -> (Arc<FakeTransport>, Arc<FakeCredentialStore>, RequestClient) {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(if signed_in {
        FakeCredentialStore::signed_in("tok-1")
    } else {
        FakeCredentialStore::default()
    });
    let client = client_with(&transport, &store);
    (transport, store, client)
}

#[tokio::test]
async fn base_url_trailing_slashes_are_trimmed() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeCredentialStore::default());
    let client = RequestClient::new("http://api.test//", transport.clone(), store);
    transport.respond_json(200, json!({"ok": true}));

    let _: Value = client.get("/domains").await.unwrap_or_default();

    assert_eq!(client.base_url(), "http://api.test");
    assert_eq!(transport.last_request().url, "http://api.test/domains");
}

#[tokio::test]
async fn authenticated_request_carries_bearer_token() {
    let (transport, _store, client) = fixture(true);
    transport.respond_json(200, json!({}));

    let result: Result<Value, _> = client.get("/permits").await;

    assert!(result.is_ok());
    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.header("authorization"), Some("Bearer tok-1"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn public_request_never_carries_token() {
    let (transport, _store, client) = fixture(true);
    transport.respond_json(200, json!({}));

    let _: Value = client
        .get_with("/auth/login", RequestOptions::public())
        .await
        .unwrap_or_default();

    assert_eq!(transport.last_request().header("Authorization"), None);
}

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let (transport, _store, client) = fixture(false);
    transport.respond_json(200, json!({}));

    let _: Value = client.get("/permits").await.unwrap_or_default();

    assert_eq!(transport.last_request().header("Authorization"), None);
}

#[tokio::test]
async fn caller_headers_override_defaults_case_insensitively() {
    let (transport, _store, client) = fixture(true);
    transport.respond_json(200, json!({}));

    let options = RequestOptions::default()
        .with_header("content-type", "text/plain")
        .with_header("X-Trace", "abc");
    let _: Value = client.get_with("/permits", options).await.unwrap_or_default();

    let request = transport.last_request();
    let content_types = request
        .headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .count();
    assert_eq!(content_types, 1);
    assert_eq!(request.header("Content-Type"), Some("text/plain"));
    assert_eq!(request.header("x-trace"), Some("abc"));
}

#[tokio::test]
async fn post_serializes_json_body() {
    let (transport, _store, client) = fixture(true);
    transport.respond_json(201, json!({"id": 5}));

    let created: Value = client
        .post("/domains", &json!({"code": "HQ"}))
        .await
        .unwrap_or_default();

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.json_body(), Some(r#"{"code":"HQ"}"#));
    assert_eq!(created, json!({"id": 5}));
}

#[tokio::test]
async fn post_without_body_omits_it() {
    let (transport, _store, client) = fixture(true);
    transport.respond_json(200, json!({}));

    let _: Value = client
        .post_with("/notifications/read/all", NO_BODY, RequestOptions::default())
        .await
        .unwrap_or_default();

    assert_eq!(transport.last_request().body, None);
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let (transport, _store, client) = fixture(true);
    transport.respond(204, "");

    let result: Result<Value, _> = client.delete("/domains/3").await;

    assert!(matches!(result, Ok(Value::Null)));
    assert_eq!(transport.last_request().method, Method::DELETE);
}

#[tokio::test]
async fn unauthorized_response_clears_credentials() {
    let (transport, store, client) = fixture(true);
    transport.respond_json(401, json!({"message": "token expired"}));

    let result: Result<Value, _> = client.get("/menus/user").await;

    assert!(matches!(
        result,
        Err(AppError::Api { status: 401, ref message }) if message == "token expired"
    ));
    assert!(store.current().is_none());
    assert_eq!(store.clear_count(), 1);
}

#[tokio::test]
async fn other_failures_keep_credentials() {
    let (transport, store, client) = fixture(true);
    transport.respond_json(403, json!({"message": "forbidden"}));

    let result: Result<Value, _> = client.get("/roles").await;

    assert!(matches!(result, Err(AppError::Api { status: 403, .. })));
    assert!(store.current().is_some());
    assert_eq!(store.clear_count(), 0);
}

#[tokio::test]
async fn nested_error_message_is_returned_verbatim() {
    let (transport, _store, client) = fixture(true);
    transport.respond_json(
        400,
        json!({"success": false, "error": {"code": "VALIDATION", "message": "invalid code"}}),
    );

    let result: Result<Value, _> = client.post("/tasks", &json!({})).await;

    let Err(error) = result else {
        panic!("request should fail");
    };
    assert_eq!(error.to_string(), "invalid code");
}

#[tokio::test]
async fn unparsable_error_body_falls_back_to_status_message() {
    let (transport, _store, client) = fixture(true);
    transport.respond(502, "<html>bad gateway</html>");

    let result: Result<Value, _> = client.get("/permits").await;

    assert!(matches!(
        result,
        Err(AppError::Api { status: 502, ref message }) if message == "HTTP error! status: 502"
    ));
}

#[tokio::test]
async fn unparsable_success_body_is_a_decode_error() {
    let (transport, _store, client) = fixture(true);
    transport.respond(200, "not json");

    let result: Result<Value, _> = client.get("/permits").await;

    assert!(matches!(result, Err(AppError::Decode(_))));
}

#[tokio::test]
async fn transport_failure_propagates_without_retry() {
    let (transport, store, client) = fixture(true);
    transport.fail("connection refused");

    let result: Result<Value, _> = client.get("/permits").await;

    assert!(matches!(result, Err(AppError::Transport(_))));
    assert_eq!(transport.requests().len(), 1);
    assert!(store.current().is_some());
}

#[tokio::test]
async fn form_body_skips_json_content_type_but_keeps_token() {
    let (transport, _store, client) = fixture(true);
    transport.respond_json(201, json!({"id": 9}));
    let form = MultipartForm::new()
        .text("title", "Inspect boiler")
        .file("files", Attachment::new("photo.jpg", b"jpeg".to_vec()));

    let created: Value = client.post_form("/tasks", form.clone()).await.unwrap_or_default();

    let request = transport.last_request();
    assert_eq!(created, json!({"id": 9}));
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.header("Content-Type"), None);
    assert_eq!(request.header("Authorization"), Some("Bearer tok-1"));
    assert_eq!(request.form_body(), Some(&form));
    assert_eq!(request.json_body(), None);
}

use std::sync::Arc;

use permitdesk_core::AppError;
use permitdesk_domain::{LoginInput, UpdateProfileInput};
use serde_json::json;

use super::AuthService;
use crate::test_support::{FakeCredentialStore, FakeTransport, client_with, user_json};

fn fixture(store: FakeCredentialStore) -> (Arc<FakeTransport>, Arc<FakeCredentialStore>, AuthService) {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(store);
    let service = AuthService::new(client_with(&transport, &store));
    (transport, store, service)
}

fn login_input() -> LoginInput {
    LoginInput {
        username: "ayu".to_owned(),
        password: "secret".to_owned(),
        domain_id: None,
    }
}

#[tokio::test]
async fn login_commits_token_user_and_default_domain() {
    let (transport, store, service) = fixture(FakeCredentialStore::default());
    transport.respond_data(json!({
        "token": "fresh-token",
        "user": user_json(),
        "default_domain": {"id": 1, "code": "D1", "name": "Domain 1", "is_active": true}
    }));

    let login = service.login(login_input()).await;

    assert!(login.is_ok());
    let request = transport.last_request();
    assert_eq!(request.url, "http://api.test/auth/login");
    assert_eq!(request.header("Authorization"), None);

    let Some(stored) = store.current() else {
        panic!("credentials should be stored");
    };
    assert_eq!(stored.token.as_str(), "fresh-token");
    assert_eq!(stored.user.username, "ayu");
    assert_eq!(stored.domain.map(|domain| domain.id), Some(1));
}

#[tokio::test]
async fn login_without_default_domain_stores_none() {
    let (transport, store, service) = fixture(FakeCredentialStore::default());
    transport.respond_data(json!({"token": "t", "user": user_json()}));

    assert!(service.login(login_input()).await.is_ok());

    assert!(matches!(store.current(), Some(ref credentials) if credentials.domain.is_none()));
}

#[tokio::test]
async fn login_rejects_blank_credentials_locally() {
    let (transport, store, service) = fixture(FakeCredentialStore::default());

    let result = service
        .login(LoginInput {
            password: "  ".to_owned(),
            ..login_input()
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(transport.requests().is_empty());
    assert!(store.current().is_none());
}

#[tokio::test]
async fn failed_login_stores_nothing() {
    let (transport, store, service) = fixture(FakeCredentialStore::default());
    transport.respond_json(400, json!({"message": "invalid username or password"}));

    let result = service.login(login_input()).await;

    assert!(matches!(result, Err(AppError::Api { status: 400, .. })));
    assert!(store.current().is_none());
}

#[tokio::test]
async fn logout_clears_store() {
    let (_transport, store, service) = fixture(FakeCredentialStore::signed_in("tok"));

    assert!(service.logout().await.is_ok());

    assert!(store.current().is_none());
    assert!(matches!(service.is_authenticated().await, Ok(false)));
}

#[tokio::test]
async fn switch_domain_keeps_user_and_replaces_token_and_domain() {
    let (transport, store, service) = fixture(FakeCredentialStore::signed_in("old"));
    transport.respond_data(json!({
        "token": "scoped",
        "current_domain": {"id": 2, "code": "D2", "name": "Domain 2", "is_active": true},
        "current_role": {"id": 3, "code": "SPV", "name": "Supervisor", "category": "Permit"}
    }));

    let switched = service.switch_domain(2).await;

    assert!(switched.is_ok());
    assert_eq!(transport.last_request().header("Authorization"), Some("Bearer old"));
    assert_eq!(transport.last_request().json_body(), Some(r#"{"domain_id":2}"#));
    let Some(stored) = store.current() else {
        panic!("credentials should be stored");
    };
    assert_eq!(stored.token.as_str(), "scoped");
    assert_eq!(stored.user.username, "ayu");
    assert_eq!(stored.domain.map(|domain| domain.id), Some(2));
}

#[tokio::test]
async fn switch_domain_requires_session() {
    let (transport, _store, service) = fixture(FakeCredentialStore::default());

    let result = service.switch_domain(2).await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn profile_reads_and_updates_through_auth_profile() {
    let (transport, _store, service) = fixture(FakeCredentialStore::signed_in("tok"));
    transport.respond_data(user_json());
    transport.respond_data(user_json());

    assert!(service.profile().await.is_ok());
    let updated = service
        .update_profile(&UpdateProfileInput {
            full_name: Some("Ayu L.".to_owned()),
            ..UpdateProfileInput::default()
        })
        .await;

    assert!(updated.is_ok());
    let request = transport.last_request();
    assert_eq!(request.method, http::Method::PUT);
    assert_eq!(request.url, "http://api.test/auth/profile");
    assert_eq!(request.json_body(), Some(r#"{"full_name":"Ayu L."}"#));
}

#[tokio::test]
async fn stored_reads_follow_credential_store() {
    let (_transport, _store, service) = fixture(FakeCredentialStore::signed_in("tok"));

    assert!(matches!(service.is_authenticated().await, Ok(true)));
    assert!(matches!(service.stored_domain().await, Ok(Some(ref domain)) if domain.id == 1));
    assert!(matches!(service.stored_user().await, Ok(Some(ref user)) if user.username == "ayu"));
    assert!(matches!(service.has_role(&["Admin"]).await, Ok(false)));
}

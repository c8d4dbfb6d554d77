use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http::StatusCode;
use permitdesk_core::{AppError, AppResult, AuthToken};
use permitdesk_domain::{Domain, User};
use serde_json::Value;

use crate::credential_ports::{CredentialStore, Credentials};
use crate::http_ports::{HttpRequest, HttpResponse, HttpTransport};
use crate::request_client::RequestClient;

pub(crate) const BASE_URL: &str = "http://api.test";

#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<VecDeque<AppResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn respond(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.push(Ok(HttpResponse {
            status,
            body: body.to_owned(),
        }));
    }

    pub(crate) fn respond_json(&self, status: u16, body: Value) {
        self.respond(status, &body.to_string());
    }

    pub(crate) fn respond_data(&self, data: Value) {
        self.respond_json(
            200,
            serde_json::json!({"success": true, "message": "ok", "data": data}),
        );
    }

    pub(crate) fn fail(&self, message: &str) {
        self.push(Err(AppError::Transport(message.to_owned())));
    }

    fn push(&self, response: AppResult<HttpResponse>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        let Some(request) = self.requests().pop() else {
            panic!("no request was sent");
        };
        request
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        self.requests
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock requests: {error}")))?
            .push(request);

        self.responses
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock responses: {error}")))?
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Transport("no scripted response".to_owned())))
    }
}

#[derive(Default)]
pub(crate) struct FakeCredentialStore {
    credentials: Mutex<Option<Credentials>>,
    clears: Mutex<usize>,
}

impl FakeCredentialStore {
    pub(crate) fn signed_in(token: &str) -> Self {
        Self {
            credentials: Mutex::new(Some(credentials(token))),
            clears: Mutex::new(0),
        }
    }

    pub(crate) fn current(&self) -> Option<Credentials> {
        self.credentials
            .lock()
            .map(|credentials| credentials.clone())
            .unwrap_or_default()
    }

    pub(crate) fn clear_count(&self) -> usize {
        self.clears.lock().map(|count| *count).unwrap_or_default()
    }
}

#[async_trait]
impl CredentialStore for FakeCredentialStore {
    async fn load(&self) -> AppResult<Option<Credentials>> {
        Ok(self.current())
    }

    async fn commit(&self, credentials: Credentials) -> AppResult<()> {
        *self
            .credentials
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock credentials: {error}")))? =
            Some(credentials);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self
            .credentials
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock credentials: {error}")))? =
            None;
        *self
            .clears
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock counter: {error}")))? += 1;
        Ok(())
    }
}

pub(crate) fn client_with(
    transport: &Arc<FakeTransport>,
    store: &Arc<FakeCredentialStore>,
) -> RequestClient {
    RequestClient::new(BASE_URL, transport.clone(), store.clone())
}

pub(crate) fn domain(id: i64) -> Domain {
    Domain {
        id,
        code: format!("D{id}"),
        name: format!("Domain {id}"),
        description: None,
        is_active: true,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

pub(crate) fn user() -> User {
    User {
        id: 1,
        role_id: 1,
        username: "ayu".to_owned(),
        email: "ayu@example.com".to_owned(),
        full_name: "Ayu Lestari".to_owned(),
        phone_number: None,
        nip: None,
        is_active: true,
        created_at: String::new(),
        updated_at: String::new(),
        role: None,
        domains: vec![domain(1)],
    }
}

pub(crate) fn credentials(token: &str) -> Credentials {
    Credentials {
        token: AuthToken::new(token),
        user: user(),
        domain: Some(domain(1)),
    }
}

pub(crate) fn user_json() -> Value {
    serde_json::json!({
        "id": 1,
        "role_id": 1,
        "username": "ayu",
        "email": "ayu@example.com",
        "full_name": "Ayu Lestari",
        "is_active": true,
        "role": {"id": 1, "code": "ADM", "name": "Admin", "category": "Permit"},
        "domains": [{"id": 1, "code": "D1", "name": "Domain 1", "is_active": true}]
    })
}

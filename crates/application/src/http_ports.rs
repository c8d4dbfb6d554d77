use async_trait::async_trait;
use http::{Method, StatusCode};
use permitdesk_core::AppResult;

use crate::multipart::MultipartForm;

/// Encoded request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// JSON text sent with `Content-Type: application/json`.
    Json(String),
    /// Form fields and files; the transport sets the boundary header.
    Multipart(MultipartForm),
}

/// One outgoing HTTP request, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: String,
    /// Header pairs in send order.
    pub headers: Vec<(String, String)>,
    /// Body, when the request carries one.
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the JSON body text, if the body is JSON.
    #[must_use]
    pub fn json_body(&self) -> Option<&str> {
        match self.body.as_ref() {
            Some(RequestBody::Json(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the form body, if the body is multipart.
    #[must_use]
    pub fn form_body(&self) -> Option<&MultipartForm> {
        match self.body.as_ref() {
            Some(RequestBody::Multipart(form)) => Some(form),
            _ => None,
        }
    }
}

/// Raw HTTP response as returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response body text.
    pub body: String,
}

/// Port performing one HTTP exchange.
///
/// Implementations fail with `AppError::Transport` only when no response was
/// received; every status code is returned as a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the response.
    async fn execute(&self, request: HttpRequest) -> AppResult<HttpResponse>;
}

use std::sync::Arc;

use http::{Method, StatusCode};
use permitdesk_core::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::credential_ports::CredentialStore;
use crate::envelope::error_message;
use crate::http_ports::{HttpRequest, HttpTransport, RequestBody};
use crate::multipart::MultipartForm;

#[cfg(test)]
mod tests;

/// Body argument for requests that send none.
pub const NO_BODY: Option<&'static Value> = None;

/// Per-request behavior switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Attach the stored bearer token when one exists.
    pub require_auth: bool,
    /// Extra headers; they replace defaults with the same name.
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            require_auth: true,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    /// Options for endpoints that must not carry credentials.
    #[must_use]
    pub fn public() -> Self {
        Self {
            require_auth: false,
            headers: Vec::new(),
        }
    }

    /// Adds a caller header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Typed JSON client for the backend API.
///
/// Every call performs exactly one transport exchange. A 401 response clears
/// the credential store before the error is returned.
#[derive(Clone)]
pub struct RequestClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    credential_store: Arc<dyn CredentialStore>,
}

impl RequestClient {
    /// Creates a client rooted at `base_url`.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        credential_store: Arc<dyn CredentialStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            base_url,
            transport,
            credential_store,
        }
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Returns the credential store consulted for tokens.
    #[must_use]
    pub fn credential_store(&self) -> &Arc<dyn CredentialStore> {
        &self.credential_store
    }

    /// Sends an authenticated `GET`.
    pub async fn get<T>(&self, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.get_with(endpoint, RequestOptions::default()).await
    }

    /// Sends a `GET` with explicit options.
    pub async fn get_with<T>(&self, endpoint: &str, options: RequestOptions) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, endpoint, NO_BODY, options).await
    }

    /// Sends an authenticated `POST` with a JSON body.
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_with(endpoint, Some(body), RequestOptions::default())
            .await
    }

    /// Sends a `POST` with explicit options.
    pub async fn post_with<B, T>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, endpoint, body, options).await
    }

    /// Sends an authenticated `PUT` with a JSON body.
    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.put_with(endpoint, Some(body), RequestOptions::default())
            .await
    }

    /// Sends a `PUT` with explicit options.
    pub async fn put_with<B, T>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, endpoint, body, options).await
    }

    /// Sends an authenticated `DELETE`.
    pub async fn delete<T>(&self, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.delete_with(endpoint, RequestOptions::default()).await
    }

    /// Sends a `DELETE` with explicit options.
    pub async fn delete_with<T>(&self, endpoint: &str, options: RequestOptions) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::DELETE, endpoint, NO_BODY, options)
            .await
    }

    /// Sends an authenticated `POST` with a multipart form body.
    pub async fn post_form<T>(&self, endpoint: &str, form: MultipartForm) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let value = self
            .request_form(Method::POST, endpoint, form, RequestOptions::default())
            .await?;

        decode_value(&Method::POST, endpoint, value)
    }

    /// Sends an authenticated `PUT` with a multipart form body.
    pub async fn put_form<T>(&self, endpoint: &str, form: MultipartForm) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let value = self
            .request_form(Method::PUT, endpoint, form, RequestOptions::default())
            .await?;

        decode_value(&Method::PUT, endpoint, value)
    }

    /// Sends a request and deserializes the success body into `T`.
    pub async fn request<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.request_json(method.clone(), endpoint, body, options).await?;

        decode_value(&method, endpoint, value)
    }

    /// Sends a request and returns the parsed success body.
    ///
    /// An empty success body parses as JSON `null`.
    pub async fn request_json<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> AppResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to serialize request body for {method} {endpoint}: {error}"
                ))
            })?;

        self.send(method, endpoint, body.map(RequestBody::Json), options)
            .await
    }

    /// Sends a multipart form and returns the parsed success body.
    ///
    /// The JSON `Content-Type` default is left out so the transport can
    /// declare the form boundary.
    pub async fn request_form(
        &self,
        method: Method,
        endpoint: &str,
        form: MultipartForm,
        options: RequestOptions,
    ) -> AppResult<Value> {
        self.send(method, endpoint, Some(RequestBody::Multipart(form)), options)
            .await
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> AppResult<Value> {
        let is_form = matches!(body, Some(RequestBody::Multipart(_)));
        let headers = self.build_headers(options, is_form).await?;

        let response = self
            .transport
            .execute(HttpRequest {
                method: method.clone(),
                url: format!("{}{endpoint}", self.base_url),
                headers,
                body,
            })
            .await?;
        let status = response.status;

        debug!(
            method = %method,
            endpoint,
            status = status.as_u16(),
            "api request completed"
        );

        let parsed = parse_body(&response.body);
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.invalidate_session(endpoint).await;
            }

            let payload = parsed.unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
            return Err(AppError::Api {
                status: status.as_u16(),
                message: error_message(status, &payload),
            });
        }

        parsed.map_err(|error| {
            AppError::Decode(format!(
                "response body for {method} {endpoint} is not valid JSON: {error}"
            ))
        })
    }

    async fn build_headers(
        &self,
        options: RequestOptions,
        is_form: bool,
    ) -> AppResult<Vec<(String, String)>> {
        let mut headers = Vec::new();
        if !is_form {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }

        if options.require_auth
            && let Some(token) = self.credential_store.token().await?
        {
            headers.push(("Authorization".to_owned(), token.bearer()));
        }

        for (name, value) in options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        Ok(headers)
    }

    async fn invalidate_session(&self, endpoint: &str) {
        warn!(endpoint, "api rejected session token, clearing stored credentials");

        if let Err(error) = self.credential_store.clear().await {
            warn!(
                endpoint,
                error = %error,
                "failed to clear stored credentials after 401"
            );
        }
    }
}

fn decode_value<T>(method: &Method, endpoint: &str, value: Value) -> AppResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|error| {
        AppError::Decode(format!(
            "unexpected response shape for {method} {endpoint}: {error}"
        ))
    })
}

fn parse_body(body: &str) -> Result<Value, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body)
}

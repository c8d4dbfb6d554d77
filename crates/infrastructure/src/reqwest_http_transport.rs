use async_trait::async_trait;
use permitdesk_application::{HttpRequest, HttpResponse, HttpTransport, MultipartForm, RequestBody};
use permitdesk_core::{AppError, AppResult};


/// HTTP transport backed by a shared `reqwest` client.
#[derive(Clone, Default)]
pub struct ReqwestHttpTransport {
    http_client: reqwest::Client,
}

impl ReqwestHttpTransport {
    /// Creates a transport over an existing client.
    #[must_use]
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn execute(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.http_client.request(method.clone(), url.as_str());
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        match body {
            Some(RequestBody::Json(text)) => builder = builder.body(text),
            Some(RequestBody::Multipart(form)) => builder = builder.multipart(build_form(form)?),
            None => {}
        }

        let response = builder.send().await.map_err(|error| {
            AppError::Transport(format!("{method} {url} failed: {error}"))
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|error| {
            AppError::Transport(format!(
                "{method} {url} returned {status} but the body could not be read: {error}"
            ))
        })?;

        Ok(HttpResponse { status, body })
    }
}

fn build_form(form: MultipartForm) -> AppResult<reqwest::multipart::Form> {
    let mut multipart = reqwest::multipart::Form::new();
    for (name, value) in form.texts() {
        multipart = multipart.text(name.clone(), value.clone());
    }
    for (name, attachment) in form.files() {
        let mut part = reqwest::multipart::Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone());
        if let Some(content_type) = attachment.content_type.as_deref() {
            part = part.mime_str(content_type).map_err(|error| {
                AppError::Validation(format!(
                    "invalid content type '{content_type}' for {}: {error}",
                    attachment.file_name
                ))
            })?;
        }
        multipart = multipart.part(name.clone(), part);
    }

    Ok(multipart)
}

//! Multipart form bodies for endpoints that read form fields.

use permitdesk_core::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;

/// File content uploaded as one form part.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type, when known.
    pub content_type: Option<String>,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment without a declared MIME type.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    /// Sets the MIME type sent with the part.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Text fields and file parts of a `multipart/form-data` body, in send order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    texts: Vec<(String, String)>,
    files: Vec<(String, Attachment)>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds text fields from a payload that serializes to a JSON object.
    ///
    /// Null members are skipped, scalars are sent as their text form and
    /// arrays repeat the field once per element.
    pub fn from_payload<T>(payload: &T) -> AppResult<Self>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(payload).map_err(|error| {
            AppError::Internal(format!("failed to serialize form payload: {error}"))
        })?;
        let Value::Object(members) = value else {
            return Err(AppError::Internal(
                "form payload must serialize to an object".to_owned(),
            ));
        };

        let mut form = Self::new();
        for (name, value) in members {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = field_text(item) {
                            form.texts.push((name.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = field_text(other) {
                        form.texts.push((name, text));
                    }
                }
            }
        }

        Ok(form)
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.texts.push((name.into(), value.into()));
        self
    }

    /// Appends a file part.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, attachment: Attachment) -> Self {
        self.files.push((name.into(), attachment));
        self
    }

    /// Returns the text fields.
    #[must_use]
    pub fn texts(&self) -> &[(String, String)] {
        &self.texts
    }

    /// Returns the file parts.
    #[must_use]
    pub fn files(&self) -> &[(String, Attachment)] {
        &self.files
    }

    /// Returns the first value of a text field.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }
}

fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}

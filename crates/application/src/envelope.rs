use http::StatusCode;
use permitdesk_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paging metadata attached to list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// One-based page number.
    #[serde(default)]
    pub page: u32,
    /// Page size.
    #[serde(default)]
    pub limit: u32,
    /// Total matching records.
    #[serde(default)]
    pub total: u64,
}

/// Standard success wrapper around every resource payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server handled the request.
    pub success: bool,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// Resource payload.
    pub data: T,
    /// Paging metadata for list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
    /// Server trace id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Returns the payload, dropping the wrapper.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Decodes a success body into its envelope.
///
/// Bodies that do not match `ApiResponse<T>` and envelopes reporting
/// `success: false` both fail with `AppError::Decode`.
pub fn decode_envelope<T>(body: Value) -> AppResult<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    let envelope: ApiResponse<T> = serde_json::from_value(body).map_err(|error| {
        AppError::Decode(format!("response does not match the resource envelope: {error}"))
    })?;

    if !envelope.success {
        return Err(AppError::Decode(format!(
            "response envelope reported failure: {}",
            envelope.message
        )));
    }

    Ok(envelope)
}

/// Decodes a list body, reading `data: null` as an empty list.
pub fn decode_list_envelope<T>(body: Value) -> AppResult<ApiResponse<Vec<T>>>
where
    T: DeserializeOwned,
{
    let envelope = decode_envelope::<Option<Vec<T>>>(body)?;

    Ok(ApiResponse {
        success: envelope.success,
        message: envelope.message,
        data: envelope.data.unwrap_or_default(),
        meta: envelope.meta,
        trace_id: envelope.trace_id,
    })
}

/// Extracts the message reported for a failed request.
///
/// Looks at the top-level `message`, then the nested `error.message`, and
/// falls back to the status code.
#[must_use]
pub fn error_message(status: StatusCode, body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            body.get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
        })
        .map_or_else(
            || format!("HTTP error! status: {}", status.as_u16()),
            ToOwned::to_owned,
        )
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use permitdesk_core::AppError;
    use serde::de::IgnoredAny;
    use serde_json::json;

    use super::{ApiResponse, decode_envelope, decode_list_envelope, error_message};

    #[test]
    fn envelope_keeps_meta_for_lists() {
        let envelope = decode_envelope::<Vec<i64>>(json!({
            "success": true,
            "message": "ok",
            "data": [1, 2],
            "meta": {"page": 1, "limit": 2, "total": 9}
        }));

        let Ok(envelope) = envelope else {
            panic!("envelope should decode");
        };
        assert_eq!(envelope.meta.map(|meta| meta.total), Some(9));
        assert_eq!(envelope.into_data(), vec![1, 2]);
    }

    #[test]
    fn envelope_without_success_flag_is_rejected() {
        let result = decode_envelope::<Vec<i64>>(json!({"data": [1]}));

        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn success_false_is_a_decode_error_carrying_message() {
        let result = decode_envelope::<Option<IgnoredAny>>(json!({
            "success": false,
            "message": "nothing changed"
        }));

        assert!(
            matches!(result, Err(AppError::Decode(message)) if message.contains("nothing changed"))
        );
    }

    #[test]
    fn missing_optional_data_decodes_as_none() {
        let result: Result<ApiResponse<Option<IgnoredAny>>, _> =
            decode_envelope(json!({"success": true, "message": "deleted"}));

        assert!(matches!(result, Ok(ApiResponse { data: None, .. })));
    }

    #[test]
    fn null_list_data_decodes_as_empty_page() {
        let envelope = decode_list_envelope::<i64>(json!({
            "success": true,
            "message": "ok",
            "data": null,
            "meta": {"page": 1, "limit": 10, "total": 0}
        }));

        let Ok(envelope) = envelope else {
            panic!("null list should decode");
        };
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.meta.map(|meta| meta.total), Some(0));
    }

    #[test]
    fn list_envelope_still_rejects_non_list_data() {
        let result = decode_list_envelope::<i64>(json!({"success": true, "data": {"id": 1}}));

        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn error_message_prefers_top_level_message() {
        let body = json!({"message": "top", "error": {"message": "nested"}});

        assert_eq!(error_message(StatusCode::BAD_REQUEST, &body), "top");
    }

    #[test]
    fn error_message_reads_nested_error_envelope() {
        let body = json!({"success": false, "error": {"code": "BAD", "message": "invalid code"}});

        assert_eq!(error_message(StatusCode::BAD_REQUEST, &body), "invalid code");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, &json!({})),
            "HTTP error! status: 502"
        );
    }
}

//! Uniform server response envelope.
//!
//! Every `/UserAuth` endpoint wraps its payload in the same shape:
//! `{ Status, Message, Data, HttpStatusCode, RequestUrl }`. `Status=false`
//! is a business-level failure carried inside an HTTP 200, distinct from a
//! transport failure. [`ApiEnvelope::into_result`] is the single place this
//! branching happens; downstream code only ever sees `Result<T, ApiError>`.

use serde::{Deserialize, Serialize};

/// Server response envelope, PascalCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiEnvelope<T> {
    pub status: bool,
    pub message: Option<Vec<String>>,
    pub data: T,
    pub http_status_code: i32,
    pub request_url: String,
}

/// API failure, discriminated by layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network unreachable, non-2xx status, or an unparsable body.
    Transport(String),
    /// HTTP succeeded but the envelope carried `Status=false`; one entry
    /// per server message, possibly empty.
    Business(Vec<String>),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
            ApiError::Business(messages) => {
                write!(f, "business error: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl<T> ApiEnvelope<T> {
    /// Collapse the `Status` flag into a typed result.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.status {
            Ok(self.data)
        } else {
            Err(ApiError::Business(self.message.unwrap_or_default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pascal_case_envelope() {
        let json = r#"{
            "Status": true,
            "Message": null,
            "Data": [1, 2, 3],
            "HttpStatusCode": 200,
            "RequestUrl": "/UserAuth/GetPageName"
        }"#;
        let envelope: ApiEnvelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert!(envelope.status);
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert_eq!(envelope.request_url, "/UserAuth/GetPageName");
    }

    #[test]
    fn test_into_result_success() {
        let envelope = ApiEnvelope {
            status: true,
            message: None,
            data: 42,
            http_status_code: 200,
            request_url: String::new(),
        };
        assert_eq!(envelope.into_result().unwrap(), 42);
    }

    #[test]
    fn test_into_result_business_failure_keeps_messages() {
        let envelope = ApiEnvelope {
            status: false,
            message: Some(vec!["err-a".to_string(), "err-b".to_string()]),
            data: (),
            http_status_code: 200,
            request_url: String::new(),
        };
        assert_eq!(
            envelope.into_result().unwrap_err(),
            ApiError::Business(vec!["err-a".to_string(), "err-b".to_string()])
        );
    }

    #[test]
    fn test_into_result_business_failure_null_message() {
        let envelope: ApiEnvelope<()> = serde_json::from_str(
            r#"{"Status": false, "Message": null, "Data": null, "HttpStatusCode": 200, "RequestUrl": ""}"#,
        )
        .unwrap();
        assert_eq!(envelope.into_result().unwrap_err(), ApiError::Business(vec![]));
    }
}

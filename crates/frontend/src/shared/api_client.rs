//! Envelope-aware HTTP client.
//!
//! All `/UserAuth` endpoints answer with the uniform [`ApiEnvelope`] shape.
//! These helpers decode it once at the boundary: transport problems (send
//! failure, non-2xx without a parsable envelope, body decode failure) become
//! [`ApiError::Transport`], a `Status=false` envelope becomes
//! [`ApiError::Business`]. Nothing downstream re-checks `Status` ad hoc.

use contracts::shared::envelope::{ApiEnvelope, ApiError};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

/// GET a path and unwrap its envelope.
pub async fn get_envelope<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

    decode_envelope(response).await
}

/// POST a JSON body to a path and unwrap the response envelope.
pub async fn post_envelope<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

    decode_envelope(response).await
}

async fn decode_envelope<T>(response: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    // A business failure still arrives as HTTP 200 with a parsable envelope;
    // only an unparsable or non-2xx body counts as a transport failure.
    if !response.ok() {
        return Err(ApiError::Transport(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))?;

    envelope.into_result()
}

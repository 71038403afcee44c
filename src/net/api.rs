//! REST helpers for the backend collections.
//!
//! One `GET` to read a whole collection, one `POST` to append a record.
//! Callers get `Result` outputs and decide presentation; nothing here
//! retries, times out, or touches panel state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::model::Entity;

/// Failure of a backend request, kept coarse: the UI only needs something
/// displayable, and every failure leaves list state untouched.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Collection URL for an endpoint segment.
///
/// The configured base is used verbatim — no normalization, no validation.
pub fn collection_url(base: &str, segment: &str) -> String {
    format!("{base}/{segment}/")
}

/// `GET {base}/{segment}/` and decode the full collection.
///
/// # Errors
///
/// Returns [`ApiError`] when the request cannot be sent, the server answers
/// with a non-success status, or the body does not decode as a record list.
pub async fn fetch_collection<E: Entity>(base: &str) -> Result<Vec<E>, ApiError> {
    let url = collection_url(base, E::SEGMENT);
    log::debug!("GET {url}");
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<Vec<E>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST {base}/{segment}/` with a create payload.
///
/// The response body is ignored; callers follow up with a fresh list fetch
/// to make the new record visible.
///
/// # Errors
///
/// Returns [`ApiError`] when the request cannot be sent or the server
/// answers with a non-success status.
pub async fn create_record(base: &str, segment: &str, payload: &Value) -> Result<(), ApiError> {
    let url = collection_url(base, segment);
    log::debug!("POST {url}");
    let response = gloo_net::http::Request::post(&url)
        .json(payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

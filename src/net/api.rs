//! Fetch helpers for the status and comment endpoints.
//!
//! Browser (wasm32): real HTTP calls via `gloo-net`.
//! Other targets: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed or malformed
//! response degrades to a logged no-op in the render tasks, leaving the page
//! in its default all-hidden state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::LoginStatus;

/// Authentication status endpoint.
pub const USER_ENDPOINT: &str = "/user";
/// Comment list endpoint; takes the cap as a `max` query parameter.
pub const DATA_ENDPOINT: &str = "/data";

/// A failed read from one of the page's endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GET {0} failed: {1}")]
    Request(&'static str, String),
    #[error("GET {0} returned status {1}")]
    Status(&'static str, u16),
    #[error("GET {0} returned an unexpected body: {1}")]
    Decode(&'static str, String),
}

/// Build the comment endpoint URL for a given maximum item count.
pub fn comments_url(max_comments: u32) -> String {
    format!("{DATA_ENDPOINT}?max={max_comments}")
}

/// Fetch the visitor's login status from `GET /user`.
pub async fn fetch_login_status() -> Result<LoginStatus, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::get(USER_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Request(USER_ENDPOINT, e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(USER_ENDPOINT, resp.status()));
        }
        resp.json::<LoginStatus>()
            .await
            .map_err(|e| ApiError::Decode(USER_ENDPOINT, e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Request(
            USER_ENDPOINT,
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Fetch at most `max_comments` stored comments from `GET /data`.
/// The server bounds the response length; order is preserved as returned.
pub async fn fetch_comments(max_comments: u32) -> Result<Vec<String>, ApiError> {
    let url = comments_url(max_comments);
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(DATA_ENDPOINT, e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(DATA_ENDPOINT, resp.status()));
        }
        resp.json::<Vec<String>>()
            .await
            .map_err(|e| ApiError::Decode(DATA_ENDPOINT, e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Err(ApiError::Request(
            DATA_ENDPOINT,
            "not available outside the browser".to_owned(),
        ))
    }
}

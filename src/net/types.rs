//! Wire types for the status and comment endpoints.
//!
//! The status endpoint reports whether the visitor is authenticated together
//! with the matching login or logout redirect target. The comment endpoint
//! returns a plain JSON array of strings, so it needs no dedicated type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Response body of `GET /user`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatus {
    /// Whether the current visitor is authenticated.
    pub is_logged_in: bool,
    /// Login URL when logged out, logout URL when logged in.
    pub redirect_url: String,
}

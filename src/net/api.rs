//! REST fetch helper for the remote user listing.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native (tests): a stub returning [`FetchError::Unavailable`] since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode — transport error, non-2xx status, undecodable body —
//! surfaces as a distinct [`FetchError`] variant so callers can never
//! mistake a failed fetch for a successful empty list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::User;

/// Fixed remote user-listing endpoint.
pub const USERS_ENDPOINT: &str = "https://api.fake-rest.refine.dev/users";

/// Why a user fetch failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    Http(u16),
    /// The request never completed (DNS, connection, CORS, ...).
    Network(String),
    /// The response body was not a valid user array.
    Decode(String),
    /// Fetching is not possible in this build (native test stub).
    Unavailable,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(status) => write!(f, "request failed with status {status}"),
            Self::Network(cause) => write!(f, "network error: {cause}"),
            Self::Decode(cause) => write!(f, "invalid response body: {cause}"),
            Self::Unavailable => write!(f, "fetch not available in this build"),
        }
    }
}

/// Build the listing URL, optionally restricted to active users.
pub fn users_endpoint(active_only: bool) -> String {
    if active_only {
        format!("{USERS_ENDPOINT}?status=true")
    } else {
        USERS_ENDPOINT.to_owned()
    }
}

/// Fetch the user list, optionally filtered to active users.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_users(active_only: bool) -> Result<Vec<User>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = users_endpoint(active_only);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Http(resp.status()));
        }
        resp.json::<Vec<User>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = active_only;
        Err(FetchError::Unavailable)
    }
}

mod request;

use crate::har::Entry;
use reqwest::blocking::{Client, Response};
use reqwest::redirect::Policy;
use thiserror::Error;

/// Everything that can go wrong between a recorded entry and a live response
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The capture never completed (status 0 or a recorded capture error).
    /// There is nothing to compare against; callers should skip, not fail.
    #[error("incomplete capture: no recorded response to compare against")]
    Incomplete,
    #[error("invalid request method: {0:?}")]
    InvalidMethod(String),
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid recorded header name: {0}")]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
    #[error("invalid recorded header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
    /// Network-level failure during replay (DNS, connect, TLS, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ReplayError {
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ReplayError::Incomplete)
    }
}

/// Replays recorded entries through a client configured like a browsing
/// session that refuses to follow redirects.
///
/// The default client keeps a cookie jar, so `Set-Cookie` responses from
/// earlier entries are attached to later ones, and its redirect policy is
/// `Policy::none()`: a 3xx response comes back as an ordinary success with
/// its `Location` header intact, because the comparison target is the
/// redirect itself, never the page it points at.
///
/// The jar is the only shared mutable state. Replaying entries of one
/// document concurrently through a shared `Replayer` races on cookie values
/// (last write wins per cookie); replay sequentially, or give each task its
/// own `Replayer`, when that matters.
pub struct Replayer {
    client: Client,
}

impl Replayer {
    /// Build a replayer with the default cookie-jar, no-redirect client
    pub fn new() -> Result<Self, ReplayError> {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Use a caller-supplied client (custom timeout, no jar, per-task isolation)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Reconstruct and dispatch one entry's request, returning the raw
    /// response. `Incomplete` propagates from reconstruction untouched and
    /// means no network call was made.
    pub fn replay(&self, entry: &Entry) -> Result<Response, ReplayError> {
        let request = entry.build_request()?;
        Ok(self.client.execute(request)?)
    }
}

use thiserror::Error;

/// Failure to obtain a bearer token from the identity endpoint.
///
/// Carries the upstream status and body so the caller can surface
/// diagnostics. Never retried here; the previous cached token is not
/// reused as a fallback.
#[derive(Debug, Error)]
pub enum AuthFailure {
    #[error("token request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),
}

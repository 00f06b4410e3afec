/// Upstream module
///
/// Client for the third-party top-up API. Route handlers translate
/// inbound requests into these calls and forward the result verbatim.

pub mod client;
pub mod types;

use thiserror::Error;

use crate::auth::error::AuthFailure;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Auth(#[from] AuthFailure),

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

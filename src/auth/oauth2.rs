use std::collections::HashMap;
use std::fmt;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::auth::error::AuthFailure;
use crate::auth::token::CachedToken;
use crate::helpers::time::now_i64;
use crate::utils::constants::{DEFAULT_TOKEN_LIFETIME_SECS, GRANT_CLIENT_CREDENTIALS};

/// Client-credentials pair for the identity endpoint. Immutable after load.
#[derive(Clone)]
pub struct OAuthCredentials {
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
}

// the secret must never reach logs
impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Issuance response. `expires_in` is a lifetime in seconds.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OAuth2Source {
    pub credentials: OAuthCredentials,
    pub safety_margin_seconds: u64,
    client: Client,
}

impl OAuth2Source {
    pub fn new(credentials: OAuthCredentials, safety_margin_seconds: u64, client: Client) -> Self {
        Self {
            credentials,
            safety_margin_seconds,
            client,
        }
    }

    /// One issuance round trip against the identity endpoint. Does not
    /// consult or update any cache.
    pub async fn fetch_token(&self) -> Result<CachedToken, AuthFailure> {
        let mut form = HashMap::new();
        form.insert("grant_type", GRANT_CLIENT_CREDENTIALS);
        form.insert("client_id", self.credentials.client_id.as_str());
        form.insert("client_secret", self.credentials.client_secret.as_str());

        let response = self
            .client
            .post(&self.credentials.token_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(AuthFailure::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TokenResponse = response.json().await?;
        let expires_at = compute_expires_at(now_i64(), parsed.expires_in, self.safety_margin_seconds);
        debug!(
            client_id = %self.credentials.client_id,
            expires_at, "issued fresh bearer token"
        );
        Ok(CachedToken::new(parsed.access_token, expires_at))
    }
}

/// `issued_at + lifetime - safety margin`, with a one hour lifetime
/// assumed when the response omits `expires_in`.
pub(crate) fn compute_expires_at(issued_at: i64, expires_in: Option<u64>, safety_margin_seconds: u64) -> i64 {
    let lifetime = expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
    issued_at + lifetime as i64 - safety_margin_seconds as i64
}

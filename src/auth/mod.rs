/// Auth module
///
/// Defines the supported upstream authentication schemes and provides a
/// factory to build them from config.

pub mod error;
pub mod oauth2;
pub mod token;
pub mod token_cache;

use std::fmt;

use anyhow::{bail, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;

use crate::auth::error::AuthFailure;
use crate::auth::oauth2::{OAuth2Source, OAuthCredentials};
use crate::auth::token_cache::TokenCache;
use crate::config::service::AuthConfig;

/// How outbound requests to the top-up API authenticate.
///
/// The static flavors carry resolved secrets; only `OAuth2` has a
/// lifecycle, delegated to [`TokenCache`].
#[derive(Clone)]
pub enum AuthScheme {
    ApiKey(String),
    Basic { username: String, password: String },
    OAuth2(TokenCache),
}

// static secrets must never reach logs
impl fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::ApiKey(_) => f.write_str("ApiKey(***)"),
            AuthScheme::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            AuthScheme::OAuth2(cache) => f.debug_tuple("OAuth2").field(cache).finish(),
        }
    }
}

impl AuthScheme {
    /// Value for the upstream `Authorization` header. Only the OAuth2
    /// arm can fail or reach the network.
    pub async fn authorization_header(&self) -> Result<String, AuthFailure> {
        match self {
            AuthScheme::ApiKey(key) => Ok(format!("Bearer {}", key)),
            AuthScheme::Basic { username, password } => Ok(format!(
                "Basic {}",
                STANDARD.encode(format!("{}:{}", username, password))
            )),
            AuthScheme::OAuth2(cache) => Ok(format!("Bearer {}", cache.get_token().await?)),
        }
    }
}

/// Build the configured scheme, resolving credential indirections once.
pub fn build_auth(cfg: &AuthConfig, safety_margin_seconds: u64, client: &Client) -> Result<AuthScheme> {
    if let Some(api_key) = &cfg.api_key {
        return Ok(AuthScheme::ApiKey(api_key.key.resolve()?));
    }
    if let Some(basic) = &cfg.basic {
        return Ok(AuthScheme::Basic {
            username: basic.username.resolve()?,
            password: basic.password.resolve()?,
        });
    }
    if let Some(oauth2) = &cfg.oauth2 {
        let credentials = OAuthCredentials {
            token_url: oauth2.token_url.clone(),
            client_id: oauth2.client_id.resolve()?,
            client_secret: oauth2.client_secret.resolve()?,
        };
        let source = OAuth2Source::new(credentials, safety_margin_seconds, client.clone());
        return Ok(AuthScheme::OAuth2(TokenCache::new(source)));
    }
    bail!("no credentials configured")
}

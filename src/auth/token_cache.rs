use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::auth::error::AuthFailure;
use crate::auth::oauth2::OAuth2Source;
use crate::auth::token::CachedToken;
use crate::observability::metrics::get_metrics;

/// Cache holding at most one bearer token for a credential pair.
///
/// Reads take the `RwLock` fast path and never touch the network while
/// the cached entry is valid. A miss funnels through the `refresh`
/// guard, so concurrent callers racing on a simultaneous expiry share a
/// single issuance request instead of stampeding the identity endpoint.
#[derive(Debug, Clone)]
pub struct TokenCache {
    source: OAuth2Source,
    current: Arc<RwLock<Option<CachedToken>>>,
    refresh: Arc<Mutex<()>>,
}

impl TokenCache {
    pub fn new(source: OAuth2Source) -> Self {
        Self {
            source,
            current: Arc::new(RwLock::new(None)),
            refresh: Arc::new(Mutex::new(())),
        }
    }

    /// Returns a valid bearer token, fetching a fresh one only when the
    /// cached entry is absent or past its computed expiration.
    pub async fn get_token(&self) -> Result<String, AuthFailure> {
        if let Some(value) = self.cached_valid().await {
            return Ok(value);
        }

        let _guard = self.refresh.lock().await;
        // another caller may have refreshed while we waited on the guard
        if let Some(value) = self.cached_valid().await {
            return Ok(value);
        }

        debug!("token absent or expired, requesting a fresh one");
        let metrics = get_metrics().await;
        metrics.token_refreshes.inc();
        let token = match self.source.fetch_token().await {
            Ok(token) => token,
            Err(failure) => {
                metrics.token_refresh_failures.inc();
                return Err(failure);
            }
        };
        let value = token.value.clone();
        *self.current.write().await = Some(token);
        Ok(value)
    }

    async fn cached_valid(&self) -> Option<String> {
        self.current
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_valid())
            .map(|token| token.value.clone())
    }
}

use crate::helpers::time::now_i64;

/// Bearer token with its computed expiration.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub value: String,
    /// UNIX seconds; the safety margin is already subtracted, so the
    /// token is treated as invalid strictly before its real expiry.
    pub expires_at: i64,
}

impl CachedToken {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    pub fn is_valid_at(&self, now_unix_ts: i64) -> bool {
        now_unix_ts < self.expires_at
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(now_i64())
    }
}

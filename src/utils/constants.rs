//! Shared constants and invariants

/// Subtracted from the server-declared lifetime so a cached token is
/// treated as invalid strictly before its real expiry.
pub const DEFAULT_SAFETY_MARGIN_SECS: u64 = 60;

/// Assumed lifetime when the issuance response omits `expires_in`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

pub const GRANT_CLIENT_CREDENTIALS: &str = "client_credentials";

// Upstream API defaults
pub const DEFAULT_COUNTRY_ISO: &str = "BR";
pub const DEFAULT_SEND_VALUE: u64 = 10;
pub const DEFAULT_SENDER_SMS: &str = "Simulação";

use std::{env, fs};

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::config::settings::SettingsConfig;

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub settings: SettingsConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// ================================
/// Upstream top-up API
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// e.g. https://api.dingconnect.com/api/V1
    pub base_url: String,
    pub timeout_ms: Option<u64>,
}

/// ================================
/// Authentication
/// ================================
/// Exactly one flavor must be configured; the loader enforces this.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    pub api_key: Option<ApiKeyConfig>,
    pub basic: Option<BasicAuthConfig>,
    pub oauth2: Option<OAuth2Config>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiKeyConfig {
    pub key: CredentialValue,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BasicAuthConfig {
    pub username: CredentialValue,
    pub password: CredentialValue,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OAuth2Config {
    pub token_url: String,
    pub client_id: CredentialValue,
    pub client_secret: CredentialValue,
}

/// Credential value sources
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum CredentialValue {
    Literal { value: String },
    FromEnv { from_env: String },
    FromFile { from_file: String },
}

impl CredentialValue {
    /// Resolve to a concrete string at load time; credentials are
    /// immutable afterwards.
    pub fn resolve(&self) -> Result<String> {
        match self {
            CredentialValue::Literal { value } => Ok(value.to_owned()),
            CredentialValue::FromEnv { from_env } => env::var(from_env)
                .map_err(|_| anyhow!("environment variable '{}' is not set", from_env)),
            CredentialValue::FromFile { from_file } => fs::read_to_string(from_file)
                .map(|raw| raw.trim().to_string())
                .map_err(|err| anyhow!("failed to read credential file '{}': {}", from_file, err)),
        }
    }
}

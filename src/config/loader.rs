use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use crate::config::service::ServiceConfig;
use crate::utils::constants::DEFAULT_SAFETY_MARGIN_SECS;

/// Load and validate config from YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let raw = fs::read_to_string(path)?;
    let mut config: ServiceConfig = serde_yaml::from_str(&raw)?;

    // Apply defaults
    if config.settings.safety_margin_seconds.is_none() {
        config.settings.safety_margin_seconds = Some(DEFAULT_SAFETY_MARGIN_SECS);
    }

    // Validate upstream
    if config.upstream.base_url.trim().is_empty() {
        bail!("upstream.base_url must be set");
    }

    // Absent or ambiguous credentials are a startup-time fatal condition.
    let configured = [
        config.auth.api_key.is_some(),
        config.auth.basic.is_some(),
        config.auth.oauth2.is_some(),
    ]
    .iter()
    .filter(|flag| **flag)
    .count();
    match configured {
        0 => bail!("no credentials configured: set one of auth.api_key, auth.basic, auth.oauth2"),
        1 => {}
        _ => bail!("auth.api_key, auth.basic and auth.oauth2 are mutually exclusive"),
    }

    Ok(config)
}

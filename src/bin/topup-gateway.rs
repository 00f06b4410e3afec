use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use topup_gateway::auth::build_auth;
use topup_gateway::config::loader::load_config;
use topup_gateway::server;
use topup_gateway::upstream::client::UpstreamClient;
use topup_gateway::utils::constants::{DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_SAFETY_MARGIN_SECS};
use topup_gateway::utils::logging::{self, LogLevel};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "topup-gateway.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let args = Args::parse();
    let service_config = load_config(&args.config)?;
    logging::run(&service_config, args.log_level)?;

    // -------------------------------
    // 2. Create request client
    // -------------------------------

    let timeout_ms = service_config
        .upstream
        .timeout_ms
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_MS);
    let client = Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()?;

    // -------------------------------
    // 3. Build the authentication scheme
    //
    // absent or ambiguous credentials already failed in the loader;
    // unresolvable indirections (env, file) fail here
    // -------------------------------

    let safety_margin_seconds = service_config
        .settings
        .safety_margin_seconds
        .unwrap_or(DEFAULT_SAFETY_MARGIN_SECS);
    let auth = build_auth(&service_config.auth, safety_margin_seconds, &client)?;

    // -------------------------------
    // 4. Build the upstream client and start the HTTP server
    // -------------------------------

    let upstream = UpstreamClient::new(&service_config.upstream, auth, client);
    info!("Service starting...");
    server::server::start(&service_config.settings, upstream).await?;

    Ok(())
}

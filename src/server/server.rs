use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::settings::SettingsConfig;
use crate::observability::metrics::{get_metrics, Metrics};
use crate::observability::routes::MetricsState;
use crate::server::routes::api_router;
use crate::upstream::client::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub metrics_state: MetricsState,
}

impl AppState {
    pub fn new(metrics: &Metrics, upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
            metrics_state: MetricsState::new(metrics.registry.clone()),
        }
    }
}

/// Start one Axum server serving the proxy routes and, when enabled,
/// the metrics endpoint.
pub async fn start(settings_config: &SettingsConfig, upstream: UpstreamClient) -> Result<()> {
    let metrics = get_metrics().await;
    let state = AppState::new(metrics, upstream);

    let app = Router::new()
        .merge(api_router())
        .merge(state.metrics_state.router(&settings_config.metrics))
        // the browser form is served from another origin
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_addr = &settings_config.server.host;
    let port = &settings_config.server.port;
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind_addr, port)).await?;
    info!("listening on {}:{}", bind_addr, port);
    metrics.up.set(1);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {}", err);
    }
}

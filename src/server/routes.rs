use std::future::Future;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::auth::error::AuthFailure;
use crate::helpers::time::get_instant;
use crate::observability::metrics::get_metrics;
use crate::server::server::AppState;
use crate::upstream::types::{EstimateRequest, TransferRequest, UpstreamResponse};
use crate::upstream::UpstreamError;
use crate::utils::constants::DEFAULT_COUNTRY_ISO;

static ERROR_MSG_AUTH: &str = "auth";
static ERROR_MSG_TRANSPORT: &str = "transport";

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/api/products", get(products))
        .route("/api/estimate", post(estimate))
        .route("/api/recharge", post(recharge))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "OK", "message": "top-up gateway is up" }))
}

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    country: Option<String>,
}

async fn products(State(state): State<AppState>, Query(query): Query<ProductsQuery>) -> Response {
    let country = query
        .country
        .unwrap_or_else(|| DEFAULT_COUNTRY_ISO.to_string());
    proxy("products", state.upstream.get_products(&country)).await
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateParams {
    product_sku: String,
    account_number: String,
}

async fn estimate(State(state): State<AppState>, Json(params): Json<EstimateParams>) -> Response {
    let payload = EstimateRequest {
        sku_code: params.product_sku,
        account_number: params.account_number,
    };
    proxy("estimate", state.upstream.estimate_price(&payload)).await
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeParams {
    product_sku: String,
    account_number: String,
    send_value: Option<u64>,
    sender_note: Option<String>,
}

async fn recharge(State(state): State<AppState>, Json(params): Json<RechargeParams>) -> Response {
    let payload = TransferRequest::new(
        params.product_sku,
        params.account_number,
        params.send_value,
        params.sender_note,
    );
    proxy("recharge", state.upstream.send_transfer(&payload)).await
}

/// Pass upstream replies through with their original status; map local
/// failures to 502 with diagnostics.
async fn proxy<F>(operation: &'static str, call: F) -> Response
where
    F: Future<Output = Result<UpstreamResponse, UpstreamError>>,
{
    let metrics = get_metrics().await;
    let start = get_instant();
    metrics
        .upstream_requests
        .with_label_values(&[operation])
        .inc();

    let result = call.await;
    metrics
        .upstream_duration
        .with_label_values(&[operation])
        .observe(start.elapsed().as_secs_f64());

    match result {
        Ok(reply) => {
            if !reply.is_success() {
                warn!("{} upstream replied with status {}", operation, reply.status);
            }
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(reply.body)).into_response()
        }
        Err(UpstreamError::Auth(failure)) => {
            metrics
                .upstream_failures
                .with_label_values(&[operation, ERROR_MSG_AUTH])
                .inc();
            error!("{} upstream authentication failed: {}", operation, failure);
            let details = match failure {
                AuthFailure::Rejected { status, body } => json!({ "status": status, "body": body }),
                AuthFailure::Request(err) => json!(err.to_string()),
            };
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "upstream authentication failed", "details": details })),
            )
                .into_response()
        }
        Err(UpstreamError::Transport(err)) => {
            metrics
                .upstream_failures
                .with_label_values(&[operation, ERROR_MSG_TRANSPORT])
                .inc();
            error!("{} upstream request failed: {}", operation, err);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "upstream request failed", "details": err.to_string() })),
            )
                .into_response()
        }
    }
}

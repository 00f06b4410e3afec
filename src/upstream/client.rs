use reqwest::{header::AUTHORIZATION, Client, RequestBuilder};
use serde_json::Value;

use crate::auth::AuthScheme;
use crate::config::service::UpstreamConfig;
use crate::upstream::types::{EstimateRequest, TransferRequest, UpstreamResponse};
use crate::upstream::UpstreamError;

/// Thin client for the top-up API: translates requests, attaches the
/// configured `Authorization` header, and passes responses through.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: String,
    auth: AuthScheme,
    client: Client,
}

impl UpstreamClient {
    pub fn new(cfg: &UpstreamConfig, auth: AuthScheme, client: Client) -> Self {
        Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            auth,
            client,
        }
    }

    pub async fn get_products(&self, country_iso: &str) -> Result<UpstreamResponse, UpstreamError> {
        let request = self
            .client
            .get(format!("{}/GetProducts", self.base_url))
            .query(&[("countryIsos", country_iso)]);
        self.send(request).await
    }

    pub async fn estimate_price(
        &self,
        payload: &EstimateRequest,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let request = self
            .client
            .post(format!("{}/EstimatePrices", self.base_url))
            .json(payload);
        self.send(request).await
    }

    pub async fn send_transfer(
        &self,
        payload: &TransferRequest,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let request = self
            .client
            .post(format!("{}/SendTransfer", self.base_url))
            .json(payload);
        self.send(request).await
    }

    /// Attach authorization, forward status + body verbatim.
    async fn send(&self, request: RequestBuilder) -> Result<UpstreamResponse, UpstreamError> {
        let authorization = self.auth.authorization_header().await?;
        let response = request.header(AUTHORIZATION, authorization).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        // non-JSON error bodies are forwarded as plain strings
        let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
        Ok(UpstreamResponse { status, body })
    }
}

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::utils::constants::{DEFAULT_SENDER_SMS, DEFAULT_SEND_VALUE};

/// Status and body of an upstream reply, forwarded verbatim.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Body for `POST /EstimatePrices`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EstimateRequest {
    pub sku_code: String,
    pub account_number: String,
}

/// Body for `POST /SendTransfer`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransferRequest {
    pub sku_code: String,
    pub account_number: String,
    pub send_value: u64,
    pub distributor_ref: String,
    pub sender_sms: String,
}

impl TransferRequest {
    pub fn new(
        sku_code: String,
        account_number: String,
        send_value: Option<u64>,
        sender_sms: Option<String>,
    ) -> Self {
        Self {
            sku_code,
            account_number,
            send_value: send_value.unwrap_or(DEFAULT_SEND_VALUE),
            distributor_ref: next_distributor_ref(),
            sender_sms: sender_sms.unwrap_or_else(|| DEFAULT_SENDER_SMS.to_string()),
        }
    }
}

/// Unique per-request reference, used by the upstream for idempotency.
fn next_distributor_ref() -> String {
    format!("tg-{}", Utc::now().timestamp_millis())
}

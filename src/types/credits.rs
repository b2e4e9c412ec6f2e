use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct CreditAccount {
    pub current_balance: f64,
    pub total_deposited: f64,
    pub total_spent: f64,
    pub total_refunded: f64,
    pub is_active: bool,
    pub is_suspended: bool,
    #[serde(default)]
    pub last_activity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingInfo {
    pub stt_cost_per_second: f64,
    pub tts_cost_per_character: f64,
    pub text_extraction_cost_per_page: f64,
    pub storage_cost_per_mb: f64,
    pub api_call_cost: f64,
    pub minimum_deposit: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountSummary {
    pub account: CreditAccount,
    pub pricing: PricingInfo,
    /// 30-day rollup; key set varies by enabled services.
    #[serde(default)]
    pub recent_activity: Value,
    #[serde(default)]
    pub recent_transactions: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositRequest {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepositResponse {
    pub transaction_id: String,
    pub amount: f64,
    pub new_balance: f64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostEstimationRequest {
    pub usage_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostEstimationResponse {
    pub usage_type: String,
    pub estimated_cost: f64,
    #[serde(default)]
    pub breakdown: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefundRequest {
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefundResponse {
    pub transaction_id: String,
    pub refunded_amount: f64,
    pub new_balance: f64,
    pub status: String,
}

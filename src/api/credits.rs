use crate::Error;
use crate::transport::request::Request;
use crate::types::{
    AccountSummary, CostEstimationRequest, CostEstimationResponse, CreditAccount, DepositRequest,
    DepositResponse, RefundRequest, RefundResponse,
};
use serde_json::Value;

/// Credit account, deposits, refunds and usage reporting.
#[derive(Clone)]
pub struct CreditsService {
    client: crate::Client,
}

impl CreditsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

impl CreditsService {
    /// `GET /credits/account`
    pub async fn account_summary(&self) -> Result<AccountSummary, Error> {
        self.client
            .send_json(Request::get(["credits", "account"]))
            .await
    }

    /// `GET /credits/account/balance`
    pub async fn balance(&self) -> Result<CreditAccount, Error> {
        self.client
            .send_json(Request::get(["credits", "account", "balance"]))
            .await
    }

    /// `POST /credits/deposit`
    pub async fn deposit(&self, deposit: &DepositRequest) -> Result<DepositResponse, Error> {
        self.client
            .send_json(Request::post(["credits", "deposit"]).json(deposit)?)
            .await
    }

    /// `POST /credits/estimate`
    pub async fn estimate_cost(
        &self,
        estimate: &CostEstimationRequest,
    ) -> Result<CostEstimationResponse, Error> {
        self.client
            .send_json(Request::post(["credits", "estimate"]).json(estimate)?)
            .await
    }

    /// `POST /credits/refund`
    pub async fn refund(&self, refund: &RefundRequest) -> Result<RefundResponse, Error> {
        self.client
            .send_json(Request::post(["credits", "refund"]).json(refund)?)
            .await
    }

    /// `GET /credits/transactions`
    pub async fn transactions(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        self.client
            .send_json(
                Request::get(["credits", "transactions"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /credits/usage`
    pub async fn usage_records(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        self.client
            .send_json(
                Request::get(["credits", "usage"])
                    .query_opt("skip", skip)
                    .query_opt("limit", limit),
            )
            .await
    }

    /// `GET /credits/usage/analytics`
    pub async fn usage_analytics(&self, days: Option<u32>) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["credits", "usage", "analytics"]).query_opt("days", days))
            .await
    }

    /// `GET /credits/usage/summary`
    pub async fn usage_summary(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["credits", "usage", "summary"]))
            .await
    }
}

//! REST client for the dashboard backend.
//!
//! One function per logical operation, each mapping to a single HTTP call
//! against the fixed `/api` base and returning the decoded JSON body
//! verbatim. No shared state, no retries, no caching; failures propagate as
//! [`gloo_net::Error`] to the caller.

use gloo_net::http::Request;
use gloo_net::Error;
use web_types::{BalanceInfo, IssuedLabel, LabelRequest, OperationsHistory, PaymentMethod, ReferralInfo};

const API_BASE: &str = "/api";

/// Fetch the current balance and today's accrued income.
pub async fn get_balance(user_id: &str) -> Result<BalanceInfo, Error> {
    Request::get(&format!("{API_BASE}/balance?user_id={user_id}"))
        .send()
        .await?
        .json()
        .await
}

/// Request a deposit address and payment label for the given method and
/// amount.
///
/// No idempotency key is sent; repeated calls issue fresh labels.
pub async fn generate_label(
    user_id: &str,
    method: PaymentMethod,
    amount: &str,
) -> Result<IssuedLabel, Error> {
    let payload = LabelRequest {
        user_id: user_id.to_string(),
        method,
        amount: amount.to_string(),
    };

    Request::post(&format!("{API_BASE}/generate_label"))
        .json(&payload)?
        .send()
        .await?
        .json()
        .await
}

/// Fetch the referral link and invite statistics.
pub async fn get_referral_info(user_id: &str) -> Result<ReferralInfo, Error> {
    Request::get(&format!("{API_BASE}/referrals?user_id={user_id}"))
        .send()
        .await?
        .json()
        .await
}

/// Fetch the deposit and withdrawal history.
pub async fn get_operations(user_id: &str) -> Result<OperationsHistory, Error> {
    Request::get(&format!("{API_BASE}/operations?user_id={user_id}"))
        .send()
        .await?
        .json()
        .await
}

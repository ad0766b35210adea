//! Shared wire types for the TONPool webview dashboard.
//!
//! These structs mirror the JSON bodies exchanged between the WASM frontend
//! and the REST backend. Field names and enum casing are part of the wire
//! contract; change them only together with the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method for a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    /// Native TON transfer
    Ton,
    /// USDT over TRC20
    Usdt,
}

impl PaymentMethod {
    /// Wire representation, also used as the currency tag on operations.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Ton => "TON",
            PaymentMethod::Usdt => "USDT",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of `GET /balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceInfo {
    /// Current balance
    pub balance: f64,
    /// Income accrued today
    pub daily_income: f64,
}

/// Request body of `POST /generate_label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRequest {
    pub user_id: String,
    pub method: PaymentMethod,
    /// Raw amount as typed by the user; the backend parses and validates it.
    pub amount: String,
}

/// Response body of `POST /generate_label`.
///
/// The address and label are issued by the backend; the client performs no
/// address generation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedLabel {
    /// Deposit address to send funds to
    pub address: String,
    /// Tag to put in the transfer comment/memo so the payment can be
    /// attributed to the user
    pub label: String,
}

/// Response body of `GET /referrals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralInfo {
    /// Invite link for the user
    pub link: String,
    /// Number of invited users
    pub count: u32,
    /// Total referral earnings
    pub earned: f64,
}

/// One deposit or withdrawal line in the operations history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub amount: f64,
    pub currency: String,
}

/// Response body of `GET /operations`.
///
/// Sections default to empty so payloads that omit one still decode; the
/// endpoint contract is provisional pending backend confirmation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationsHistory {
    #[serde(default)]
    pub deposits: Vec<OperationRecord>,
    #[serde(default)]
    pub withdrawals: Vec<OperationRecord>,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create a new API error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a new API error with a message and error code.
    pub fn with_code(message: impl Into<String>, code: &str) -> Self {
        Self {
            message: message.into(),
            code: Some(code.to_string()),
        }
    }
}

//! Server error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use web_types::ApiError;

/// Errors surfaced to API clients as JSON bodies.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Requested amount did not parse as a positive number
    #[error("amount must be a positive number")]
    InvalidAmount,

    /// Requested amount is below the configured minimum
    #[error("min deposit is {0}")]
    BelowMinDeposit(f64),

    /// No receiving wallet configured for the requested method
    #[error("{0} wallet is not configured")]
    WalletNotConfigured(&'static str),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidAmount | ServerError::BelowMinDeposit(_) => StatusCode::BAD_REQUEST,
            ServerError::WalletNotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ServerError::InvalidAmount => "INVALID_AMOUNT",
            ServerError::BelowMinDeposit(_) => "BELOW_MIN_DEPOSIT",
            ServerError::WalletNotConfigured(_) => "WALLET_NOT_CONFIGURED",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ApiError::with_code(self.to_string(), self.code()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ServerError::InvalidAmount.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::BelowMinDeposit(10.0).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::WalletNotConfigured("TON").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ServerError::WalletNotConfigured("USDT").to_string(),
            "USDT wallet is not configured"
        );
        assert_eq!(
            ServerError::BelowMinDeposit(10.0).to_string(),
            "min deposit is 10"
        );
    }
}

//! Balance route.

use axum::{
    extract::{Query, State},
    Json,
};
use web_types::BalanceInfo;

use crate::routes::UserQuery;
use crate::state::AppState;

/// GET /api/balance - Current balance and today's accrued income.
pub async fn get_balance(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Json<BalanceInfo> {
    Json(state.balance(&query.user_id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_get_balance_returns_account_fields() {
        let state = AppState::new(Config::default());
        state.seed_account("42", 1000.0, 50.0, 0, 0.0).await;

        let Json(info) = get_balance(
            State(state),
            Query(UserQuery {
                user_id: "42".to_string(),
            }),
        )
        .await;

        assert_eq!(info.balance, 1000.0);
        assert_eq!(info.daily_income, 50.0);
    }

    #[tokio::test]
    async fn test_get_balance_defaults_for_empty_user() {
        let state = AppState::new(Config::default());

        let Json(info) = get_balance(
            State(state),
            Query(UserQuery {
                user_id: String::new(),
            }),
        )
        .await;

        assert_eq!(info.balance, 0.0);
        assert_eq!(info.daily_income, 0.0);
    }
}

//! Operations history route.

use axum::{
    extract::{Query, State},
    Json,
};
use web_types::OperationsHistory;

use crate::routes::UserQuery;
use crate::state::AppState;

/// GET /api/operations - Deposit and withdrawal history.
pub async fn get_operations(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Json<OperationsHistory> {
    Json(state.operations(&query.user_id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use web_types::OperationRecord;

    #[tokio::test]
    async fn test_get_operations_preserves_order() {
        let state = AppState::new(Config::default());
        state
            .seed_operations(
                "42",
                vec![
                    OperationRecord {
                        amount: 10.0,
                        currency: "TON".to_string(),
                    },
                    OperationRecord {
                        amount: 3.0,
                        currency: "USDT".to_string(),
                    },
                    OperationRecord {
                        amount: 7.5,
                        currency: "TON".to_string(),
                    },
                ],
                vec![OperationRecord {
                    amount: 2.0,
                    currency: "TON".to_string(),
                }],
            )
            .await;

        let Json(ops) = get_operations(
            State(state),
            Query(UserQuery {
                user_id: "42".to_string(),
            }),
        )
        .await;

        let amounts: Vec<f64> = ops.deposits.iter().map(|d| d.amount).collect();
        assert_eq!(amounts, vec![10.0, 3.0, 7.5]);
        assert_eq!(ops.withdrawals.len(), 1);
    }

    #[tokio::test]
    async fn test_get_operations_empty_for_unknown_user() {
        let state = AppState::new(Config::default());

        let Json(ops) = get_operations(
            State(state),
            Query(UserQuery {
                user_id: "missing".to_string(),
            }),
        )
        .await;

        assert!(ops.deposits.is_empty());
        assert!(ops.withdrawals.is_empty());
    }
}

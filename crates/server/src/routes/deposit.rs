//! Deposit label route.

use axum::{extract::State, Json};
use web_types::{IssuedLabel, LabelRequest};

use crate::error::ServerError;
use crate::state::AppState;

/// POST /api/generate_label - Issue a deposit address and payment label.
pub async fn generate_label(
    State(state): State<AppState>,
    Json(req): Json<LabelRequest>,
) -> Result<Json<IssuedLabel>, ServerError> {
    let issued = state
        .issue_label(&req.user_id, req.method, &req.amount)
        .await?;

    tracing::info!(user_id = %req.user_id, label = %issued.label, "issued deposit label");

    Ok(Json(issued))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use web_types::PaymentMethod;

    fn test_state() -> AppState {
        AppState::new(Config {
            ton_wallet: "EQTestTonWallet".to_string(),
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn test_generate_label_issues_fresh_labels() {
        let state = test_state();

        let req = LabelRequest {
            user_id: "42".to_string(),
            method: PaymentMethod::Ton,
            amount: "10".to_string(),
        };

        let Json(first) = generate_label(State(state.clone()), Json(req.clone()))
            .await
            .unwrap();
        let Json(second) = generate_label(State(state), Json(req)).await.unwrap();

        // Duplicate clicks issue duplicate labels on purpose.
        assert_eq!(first.label, "dep-42-1");
        assert_eq!(second.label, "dep-42-2");
        assert_eq!(first.address, second.address);
    }

    #[tokio::test]
    async fn test_generate_label_rejects_bad_amount() {
        let state = test_state();

        let result = generate_label(
            State(state),
            Json(LabelRequest {
                user_id: "42".to_string(),
                method: PaymentMethod::Ton,
                amount: String::new(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ServerError::InvalidAmount)));
    }
}

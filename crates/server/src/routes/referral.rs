//! Referral route.

use axum::{
    extract::{Query, State},
    Json,
};
use web_types::ReferralInfo;

use crate::routes::UserQuery;
use crate::state::AppState;

/// GET /api/referrals - Referral link and invite statistics.
pub async fn get_referrals(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Json<ReferralInfo> {
    Json(state.referral_info(&query.user_id).await)
}

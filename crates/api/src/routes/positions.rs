//! Position routes.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use spotdash_common::error::AppError;
use spotdash_engine::position::PositionService;

use crate::state::AppState;

use super::users::WalletQuery;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/has-user-opened-position", get(has_user_opened_position))
}

#[derive(Debug, Serialize)]
pub struct HasOpenedPositionResponse {
    pub has_opened_position: bool,
}

/// GET /api/has-user-opened-position — Whether the wallet has any open position.
///
/// Malformed wallet ids are rejected with a 404.
async fn has_user_opened_position(
    State(state): State<AppState>,
    Query(query): Query<WalletQuery>,
) -> Result<Json<HasOpenedPositionResponse>, AppError> {
    let has_opened_position =
        PositionService::has_opened_position(&state.pool, &query.wallet_id).await?;

    Ok(Json(HasOpenedPositionResponse {
        has_opened_position,
    }))
}

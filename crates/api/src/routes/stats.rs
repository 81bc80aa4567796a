//! Dashboard statistics route.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Serialize;

use spotdash_common::error::AppError;
use spotdash_engine::position::PositionService;
use spotdash_engine::stats;
use spotdash_engine::user::UserService;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/get_stats", get(get_stats))
}

#[derive(Debug, Serialize)]
pub struct GetStatsResponse {
    pub total_opened_amount: Decimal,
    pub unique_users: i64,
}

/// GET /api/get_stats — Total open-position value in USDC plus distinct user count.
///
/// The price feed is only consulted when there is something to convert.
async fn get_stats(State(state): State<AppState>) -> Result<Json<GetStatsResponse>, AppError> {
    let token_amounts = PositionService::total_amounts_for_open_positions(&state.pool).await?;

    let total_opened_amount = if token_amounts.is_empty() {
        Decimal::ZERO
    } else {
        let prices = state.prices.get_current_prices().await?;
        stats::total_in_usdc(&token_amounts, &prices)
    };

    let unique_users = UserService::count_unique(&state.pool).await?;

    Ok(Json(GetStatsResponse {
        total_opened_amount,
        unique_users,
    }))
}

//! Telegram notification subscription routes.

use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use spotdash_common::error::AppError;
use spotdash_engine::telegram::{SubscribeParams, TelegramService};
use spotdash_engine::user::UserService;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/subscribe-to-notification", post(subscribe_to_notification))
        .route("/allow-notification/{telegram_id}", post(allow_notification))
}

/// POST /api/subscribe-to-notification — Link a Telegram account to a wallet.
///
/// The wallet must belong to an existing user; the telegram store is never
/// touched otherwise.
async fn subscribe_to_notification(
    State(state): State<AppState>,
    Json(params): Json<SubscribeParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = UserService::get_by_wallet_id(&state.pool, &params.wallet_id).await?;
    if user.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let subscribed =
        TelegramService::subscribe(&state.pool, &params.telegram_id, &params.wallet_id).await?;
    if !subscribed {
        return Err(AppError::Validation(
            "Failed to subscribe user to notifications".to_string(),
        ));
    }

    Ok(Json(
        json!({"detail": "User subscribed to notifications successfully"}),
    ))
}

/// POST /allow-notification/:telegram_id — Enable notifications for a Telegram user.
async fn allow_notification(
    State(state): State<AppState>,
    Path(telegram_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    TelegramService::allow_notification(&state.pool, &telegram_id).await?;

    Ok(Json(json!({"message": "Notifications enabled successfully"})))
}

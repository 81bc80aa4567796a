//! Telegram subscription service — links Telegram accounts to wallets and
//! tracks notification consent.

use sqlx::PgPool;
use uuid::Uuid;

use spotdash_common::error::AppError;

/// Service layer for telegram notification subscriptions.
pub struct TelegramService;

/// Parameters for linking a Telegram account to a wallet.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubscribeParams {
    pub telegram_id: String,
    pub wallet_id: String,
}

impl TelegramService {
    /// Link a Telegram account to a wallet with notifications enabled.
    ///
    /// Re-subscribing an already-linked Telegram account repoints it at the
    /// given wallet. Returns true if the subscription row was written.
    pub async fn subscribe(
        pool: &PgPool,
        telegram_id: &str,
        wallet_id: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO telegram_users (id, telegram_id, wallet_id, is_allowed_notification)
            VALUES ($1, $2, $3, true)
            ON CONFLICT (telegram_id)
            DO UPDATE SET wallet_id = EXCLUDED.wallet_id, is_allowed_notification = true
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(telegram_id)
        .bind(wallet_id)
        .execute(pool)
        .await?;

        let subscribed = result.rows_affected() > 0;
        if subscribed {
            tracing::info!(telegram_id, wallet_id, "Telegram subscription enabled");
        }

        Ok(subscribed)
    }

    /// Enable notifications for an existing Telegram link.
    pub async fn allow_notification(pool: &PgPool, telegram_id: &str) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE telegram_users SET is_allowed_notification = true WHERE telegram_id = $1")
                .bind(telegram_id)
                .execute(pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Telegram user {} not found",
                telegram_id
            )));
        }

        tracing::info!(telegram_id, "Notifications enabled");

        Ok(())
    }
}

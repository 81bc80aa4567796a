use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a leveraged position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Open,
    Closed,
}

impl std::fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionStatus::Open => write!(f, "open"),
            PositionStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A user in the system, keyed by their wallet identifier.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub wallet_id: String,
    pub is_contract_deployed: bool,
    pub contract_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's position in a single token.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Position {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_symbol: String,
    pub amount: Decimal,
    pub status: PositionStatus,
    pub created_at: DateTime<Utc>,
}

/// Link between a Telegram account and a wallet, with notification consent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TelegramUser {
    pub id: Uuid,
    pub telegram_id: String,
    pub wallet_id: String,
    pub is_allowed_notification: bool,
    pub created_at: DateTime<Utc>,
}

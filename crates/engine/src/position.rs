//! Position service — open-position lookups and per-token aggregation.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use spotdash_common::error::AppError;
use spotdash_common::types::PositionStatus;

/// Service layer for position queries.
pub struct PositionService;

/// Check that a wallet id looks like a 0x-prefixed hex string.
///
/// Position lookups reject malformed ids up front instead of running a query
/// that can never match.
pub fn validate_wallet_id(wallet_id: &str) -> Result<(), AppError> {
    let hex = wallet_id
        .strip_prefix("0x")
        .ok_or_else(|| AppError::InvalidWallet(wallet_id.to_string()))?;

    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidWallet(wallet_id.to_string()));
    }

    Ok(())
}

impl PositionService {
    /// Whether the wallet has at least one open position.
    pub async fn has_opened_position(pool: &PgPool, wallet_id: &str) -> Result<bool, AppError> {
        validate_wallet_id(wallet_id)?;

        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM positions p
                JOIN users u ON p.user_id = u.id
                WHERE u.wallet_id = $1 AND p.status = $2
            )
            "#,
        )
        .bind(wallet_id)
        .bind(PositionStatus::Open)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Sum open-position amounts grouped by token symbol.
    pub async fn total_amounts_for_open_positions(
        pool: &PgPool,
    ) -> Result<HashMap<String, Decimal>, AppError> {
        let rows: Vec<(String, Decimal)> = sqlx::query_as(
            r#"
            SELECT token_symbol, SUM(amount)
            FROM positions
            WHERE status = $1
            GROUP BY token_symbol
            "#,
        )
        .bind(PositionStatus::Open)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_wallet_ids_pass() {
        assert!(validate_wallet_id("0xabc123").is_ok());
        assert!(validate_wallet_id("0xDEADBEEF").is_ok());
        assert!(validate_wallet_id("0x0").is_ok());
    }

    #[test]
    fn malformed_wallet_ids_rejected() {
        for bad in ["", "0x", "abc123", "0xzz", "0x abc", "wallet-1"] {
            assert!(
                matches!(validate_wallet_id(bad), Err(AppError::InvalidWallet(_))),
                "expected rejection for {bad:?}"
            );
        }
    }
}

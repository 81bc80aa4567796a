//! User service — lookup and mutation of user records keyed by wallet id.

use sqlx::PgPool;
use uuid::Uuid;

use spotdash_common::error::AppError;
use spotdash_common::types::User;

/// Service layer for user records.
pub struct UserService;

/// Parameters for recording a deployed contract.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpdateContractParams {
    pub wallet_id: String,
    pub contract_address: String,
}

impl UserService {
    /// Fetch a user by wallet id, if one exists.
    pub async fn get_by_wallet_id(pool: &PgPool, wallet_id: &str) -> Result<Option<User>, AppError> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE wallet_id = $1")
            .bind(wallet_id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Create a user for a wallet id.
    ///
    /// The `wallet_id` unique constraint makes this idempotent: a concurrent
    /// or repeated create for the same wallet inserts exactly one row.
    pub async fn create(pool: &PgPool, wallet_id: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            "INSERT INTO users (id, wallet_id) VALUES ($1, $2) ON CONFLICT (wallet_id) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(wallet_id)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(wallet_id, "User created");
        }

        Ok(())
    }

    /// Record a deployed contract address for a user and flip the deployment flag.
    pub async fn update_contract(
        pool: &PgPool,
        user_id: Uuid,
        contract_address: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE users
            SET contract_address = $1, is_contract_deployed = true, updated_at = now()
            WHERE id = $2
            "#,
        )
        .bind(contract_address)
        .bind(user_id)
        .execute(pool)
        .await?;

        tracing::info!(user_id = %user_id, contract_address, "User contract updated");

        Ok(())
    }

    /// Fetch just the contract address for a wallet id, if any.
    pub async fn get_contract_address(
        pool: &PgPool,
        wallet_id: &str,
    ) -> Result<Option<String>, AppError> {
        let address: Option<Option<String>> =
            sqlx::query_scalar("SELECT contract_address FROM users WHERE wallet_id = $1")
                .bind(wallet_id)
                .fetch_optional(pool)
                .await?;

        Ok(address.flatten())
    }

    /// Count distinct users in the system.
    pub async fn count_unique(pool: &PgPool) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

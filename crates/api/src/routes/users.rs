//! User routes — wallet lookup, implicit creation, and contract updates.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use spotdash_common::error::AppError;
use spotdash_engine::user::{UpdateContractParams, UserService};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/check-user", get(check_user))
        .route("/api/get-user-contract", get(get_user_contract))
        .route("/api/get-user-contract-address", get(get_user_contract_address))
        .route("/api/update-user-contract", post(update_user_contract))
}

#[derive(Debug, Deserialize)]
pub struct WalletQuery {
    pub wallet_id: String,
}

#[derive(Debug, Serialize)]
pub struct ContractDeployedResponse {
    pub is_contract_deployed: bool,
}

#[derive(Debug, Serialize)]
pub struct ContractAddressResponse {
    pub contract_address: Option<String>,
}

/// GET /api/check-user — Look up a user by wallet id, creating them on first sight.
///
/// Returns whether the user's contract is deployed; a freshly created user
/// never has one.
async fn check_user(
    State(state): State<AppState>,
    Query(query): Query<WalletQuery>,
) -> Result<Json<ContractDeployedResponse>, AppError> {
    let user = UserService::get_by_wallet_id(&state.pool, &query.wallet_id).await?;

    let is_contract_deployed = match user {
        Some(user) => user.is_contract_deployed,
        None => {
            UserService::create(&state.pool, &query.wallet_id).await?;
            false
        }
    };

    Ok(Json(ContractDeployedResponse {
        is_contract_deployed,
    }))
}

/// GET /api/get-user-contract — Return the deployed contract address for a wallet.
///
/// 404 if the user is unknown or their contract has not been deployed.
async fn get_user_contract(
    State(state): State<AppState>,
    Query(query): Query<WalletQuery>,
) -> Result<Json<String>, AppError> {
    let user = UserService::get_by_wallet_id(&state.pool, &query.wallet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !user.is_contract_deployed {
        return Err(AppError::NotFound("Contract not deployed".to_string()));
    }

    let address = user
        .contract_address
        .ok_or_else(|| AppError::NotFound("Contract not deployed".to_string()))?;

    Ok(Json(address))
}

/// GET /api/get-user-contract-address — Return the contract address or null.
async fn get_user_contract_address(
    State(state): State<AppState>,
    Query(query): Query<WalletQuery>,
) -> Result<Json<ContractAddressResponse>, AppError> {
    let contract_address =
        UserService::get_contract_address(&state.pool, &query.wallet_id).await?;

    Ok(Json(ContractAddressResponse { contract_address }))
}

/// POST /api/update-user-contract — Record a deployed contract for a wallet.
///
/// Responds with `is_contract_deployed: false` and writes nothing when the
/// wallet is unknown.
async fn update_user_contract(
    State(state): State<AppState>,
    Json(params): Json<UpdateContractParams>,
) -> Result<Json<ContractDeployedResponse>, AppError> {
    let user = UserService::get_by_wallet_id(&state.pool, &params.wallet_id).await?;

    let is_contract_deployed = match user {
        Some(user) => {
            UserService::update_contract(&state.pool, user.id, &params.contract_address).await?;
            true
        }
        None => false,
    };

    Ok(Json(ContractDeployedResponse {
        is_contract_deployed,
    }))
}

//! Shared application state for the Axum API server.

use sqlx::PgPool;

use spotdash_common::config::AppConfig;
use spotdash_prices::PriceClient;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub prices: PriceClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(pool: PgPool, prices: PriceClient, config: AppConfig) -> Self {
        Self {
            pool,
            prices,
            config,
        }
    }
}

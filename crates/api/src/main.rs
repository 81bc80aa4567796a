//! Spotdash API server binary entrypoint.

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use spotdash_common::config::AppConfig;
use spotdash_common::db::create_pool;
use spotdash_prices::PriceClient;

use spotdash_api::routes::create_router;
use spotdash_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("spotdash_api=debug,spotdash_engine=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting Spotdash API server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // Create database connection pool
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Database pool created");

    // Create price feed client
    let prices = PriceClient::new(&config.price_api_url, config.price_api_timeout_ms)?;

    // Build application state
    let port = config.api_port;
    let state = AppState::new(pool, prices, config);

    // Build router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

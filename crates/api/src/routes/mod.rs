pub mod health;
pub mod notifications;
pub mod positions;
pub mod stats;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(users::router())
        .merge(positions::router())
        .merge(notifications::router())
        .merge(stats::router())
        .with_state(state)
}

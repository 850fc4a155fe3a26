use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))

        // Users, accounts, transfers
        .route("/api/user/:user_id", get(handlers::get_user))
        .route("/api/user/:user_id/accounts", get(handlers::get_accounts))
        .route(
            "/api/user/:user_id/transactions",
            get(handlers::get_transactions),
        )
        .route("/api/user/:user_id/transfer", post(handlers::transfer))
        .route(
            "/api/user/:user_id/preferences",
            get(handlers::get_preferences).put(handlers::put_preferences),
        )

        // Market data
        .route("/api/market-data", get(handlers::get_market_data))

        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

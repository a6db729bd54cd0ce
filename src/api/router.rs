use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::auth;
use super::health;
use super::state::AppState;
use super::teams;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Authentication endpoints
        .nest("/auth", auth::create_auth_router())
        // Team endpoints
        .route("/teams", post(teams::create_team).get(teams::list_teams))
        .route(
            "/teams/{alias}",
            get(teams::get_team_info).delete(teams::delete_team),
        )
        .route(
            "/teams/{alias}/users",
            post(teams::add_team_members).delete(teams::remove_team_members),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

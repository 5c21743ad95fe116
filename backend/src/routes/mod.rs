//! Route definitions for the Travel Advisor backend

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Protected routes
        .nest("/destinations", destination_routes(state.clone()))
        .nest("/preferences", preference_routes(state.clone()))
        .nest("/weather", weather_routes(state.clone()))
        .nest("/recommendations", recommendation_routes(state.clone()))
        .nest("/flights", flight_routes(state))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}

/// Destination catalog routes (protected)
fn destination_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_destinations))
        .route("/:destination_id", get(handlers::get_destination))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Preference routes (protected)
fn preference_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::get_preferences).post(handlers::submit_preferences),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Weather routes (protected)
fn weather_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/:destination_id", get(handlers::get_destination_weather))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Recommendation routes (protected)
fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_recommendations))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Flight search routes (protected)
fn flight_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/search", get(handlers::search_flights))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

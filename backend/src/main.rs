//! Travel Advisor - Backend Server
//!
//! Recommends travel destinations by combining the static catalog, live
//! weather classification, and user-declared preferences into a ranked,
//! filterable list.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod middleware;
mod routes;
mod services;
mod store;

pub use config::Config;

use external::{FlightClient, WeatherClient, WeatherLookup};
use services::{
    AuthService, DestinationCatalog, PreferenceService, RecommendationService, WeatherService,
};
use store::{InMemoryPreferenceStore, InMemoryUserStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<DestinationCatalog>,
    pub auth: AuthService,
    pub preferences: PreferenceService,
    pub weather: WeatherService,
    pub recommendations: RecommendationService,
    pub flights: Arc<FlightClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_advisor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Travel Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the destination catalog
    let catalog = Arc::new(DestinationCatalog::load()?);
    tracing::info!("Loaded {} destinations", catalog.len());

    // Build application state
    let state = build_state(config, catalog)?;

    // Build application
    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wire stores, clients, and services into the shared application state
fn build_state(config: Config, catalog: Arc<DestinationCatalog>) -> anyhow::Result<AppState> {
    let config = Arc::new(config);

    let users = Arc::new(InMemoryUserStore::new());
    let preference_store = Arc::new(InMemoryPreferenceStore::new());

    let weather_client: Arc<dyn WeatherLookup> = Arc::new(WeatherClient::new(&config.weather)?);
    let weather = WeatherService::new(weather_client);

    let preferences = PreferenceService::new(preference_store);
    let recommendations =
        RecommendationService::new(catalog.clone(), preferences.clone(), weather.clone());

    Ok(AppState {
        auth: AuthService::new(users, &config),
        flights: Arc::new(FlightClient::new(&config.flights)),
        config,
        catalog,
        preferences,
        weather,
        recommendations,
    })
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Travel Advisor API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

//! Business logic services for the Travel Advisor backend

pub mod auth;
pub mod catalog;
pub mod preferences;
pub mod recommendations;
pub mod weather;

pub use auth::AuthService;
pub use catalog::DestinationCatalog;
pub use preferences::PreferenceService;
pub use recommendations::RecommendationService;
pub use weather::WeatherService;

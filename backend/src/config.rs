//! Configuration management for the Travel Advisor backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with TRA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// JWT authentication configuration
    pub jwt: JwtConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Flight search API configuration
    pub flights: FlightsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWT tokens
    pub secret: String,

    /// Access token expiration in seconds
    pub access_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// RapidAPI key for the weather service
    pub api_key: String,

    /// RapidAPI host header for the weather service
    pub api_host: String,

    /// Upper bound for a single lookup, in seconds; a stalled upstream is
    /// treated the same as a failed one
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlightsConfig {
    /// Flight search API endpoint
    pub api_endpoint: String,

    /// RapidAPI key for the flight search service
    pub api_key: String,

    /// RapidAPI host header for the flight search service
    pub api_host: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("TRA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5980)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("jwt.secret", "development-secret-key")?
            .set_default("jwt.access_token_expiry", 86400)?
            .set_default(
                "weather.api_endpoint",
                "https://ai-weather-by-meteosource.p.rapidapi.com",
            )?
            .set_default("weather.api_key", "")?
            .set_default("weather.api_host", "ai-weather-by-meteosource.p.rapidapi.com")?
            .set_default("weather.timeout_secs", 10)?
            .set_default("flights.api_endpoint", "https://sky-scrapper.p.rapidapi.com")?
            .set_default("flights.api_key", "")?
            .set_default("flights.api_host", "sky-scrapper.p.rapidapi.com")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (TRA_ prefix)
            .add_source(
                Environment::with_prefix("TRA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5980,
            host: "0.0.0.0".to_string(),
        }
    }
}

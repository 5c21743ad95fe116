//! Weather API client for fetching daily weather readings
//!
//! Integrates with a Meteosource-style daily endpoint via RapidAPI

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Raw daily weather readings for one coordinate pair, "today"
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherMeasurement {
    pub max_temp: f64,
    pub min_temp: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub summary: String,
}

/// The weather lookup seam consumed by the recommendation pipeline
///
/// A failed, malformed, or timed-out lookup surfaces as an error here; the
/// pipeline downgrades it to "no snapshot" for that destination only.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn lookup(&self, latitude: f64, longitude: f64) -> AppResult<WeatherMeasurement>;
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    api_host: String,
    base_url: String,
}

/// Meteosource daily forecast response
#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    data: Vec<DailyEntry>,
}

#[derive(Debug, Deserialize)]
struct DailyEntry {
    temperature_max: f64,
    temperature_min: f64,
    humidity: f64,
    #[serde(default)]
    precipitation: Precipitation,
    #[serde(default)]
    summary: Option<String>,
}

/// Precipitation comes back either as a bare millimetre amount or as an
/// object carrying a `total` field, depending on the upstream plan
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Precipitation {
    Amount(f64),
    Detailed { total: f64 },
}

impl Precipitation {
    fn total(&self) -> f64 {
        match self {
            Precipitation::Amount(amount) => *amount,
            Precipitation::Detailed { total } => *total,
        }
    }
}

impl Default for Precipitation {
    fn default() -> Self {
        Precipitation::Amount(0.0)
    }
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    ///
    /// The underlying HTTP client carries a bounded timeout so a stalled
    /// upstream behaves like a failed lookup.
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            base_url: config.api_endpoint.clone(),
        })
    }

    /// Fetch today's daily readings for a coordinate pair
    pub async fn get_daily_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<WeatherMeasurement> {
        let url = format!("{}/daily", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("language", "en".to_string()),
                ("units", "metric".to_string()),
            ])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("weather request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalService(format!(
                "weather API returned {}",
                status
            )));
        }

        let data: DailyResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("malformed weather payload: {}", e)))?;

        let today = data
            .daily
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ExternalService("empty daily forecast".to_string()))?;

        Ok(WeatherMeasurement {
            max_temp: today.temperature_max,
            min_temp: today.temperature_min,
            humidity: today.humidity,
            precipitation: today.precipitation.total(),
            summary: today.summary.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl WeatherLookup for WeatherClient {
    async fn lookup(&self, latitude: f64, longitude: f64) -> AppResult<WeatherMeasurement> {
        self.get_daily_weather(latitude, longitude).await
    }
}

//! Weather snapshot model, climate classification, and the preference
//! compatibility relation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ClimateCategory;

/// A same-day weather summary for one destination
///
/// Derived per request from raw daily measurements; never persisted or
/// cached. `temperature` is the mean of the daily max and min. The category
/// is serialized as `type` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub humidity: f64,
    pub precipitation: f64,
    #[serde(rename = "type")]
    pub category: ClimateCategory,
    pub summary: String,
    pub timestamp: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Build a snapshot from one day's raw readings
    pub fn from_daily(
        max_temp: f64,
        min_temp: f64,
        humidity: f64,
        precipitation: f64,
        summary: impl Into<String>,
    ) -> Self {
        let temperature = (max_temp + min_temp) / 2.0;
        Self {
            temperature,
            max_temp,
            min_temp,
            humidity,
            precipitation,
            category: classify_weather(temperature, humidity, precipitation),
            summary: summary.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Classify raw daily readings into a climate category
///
/// Rules are evaluated in precedence order, first match wins:
/// 1. mean above 28°C: tropical when humid (>70%) or wet (>5), otherwise hot
/// 2. mean below 10°C: cold, regardless of humidity and precipitation
/// 3. otherwise: tropical when very humid (>80%) or very wet (>10),
///    otherwise moderate
///
/// Total over all real-valued inputs; there is no error path.
pub fn classify_weather(mean_temp: f64, humidity: f64, precipitation: f64) -> ClimateCategory {
    if mean_temp > 28.0 {
        if humidity > 70.0 || precipitation > 5.0 {
            return ClimateCategory::Tropical;
        }
        return ClimateCategory::Hot;
    }

    if mean_temp < 10.0 {
        return ClimateCategory::Cold;
    }

    if humidity > 80.0 || precipitation > 10.0 {
        return ClimateCategory::Tropical;
    }

    ClimateCategory::Moderate
}

/// Decide whether an observed climate category satisfies a declared weather
/// preference
///
/// Not simple equality: hot and tropical accept each other, while cold and
/// moderate accept only themselves. An unrecognized preference value is a
/// non-match, never an error.
pub fn is_compatible(observed: ClimateCategory, preference: &str) -> bool {
    let Some(preferred) = ClimateCategory::parse(preference) else {
        return false;
    };

    match preferred {
        ClimateCategory::Tropical | ClimateCategory::Hot => matches!(
            observed,
            ClimateCategory::Tropical | ClimateCategory::Hot
        ),
        ClimateCategory::Cold => observed == ClimateCategory::Cold,
        ClimateCategory::Moderate => observed == ClimateCategory::Moderate,
    }
}

//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees
///
/// Serialized as `lat`/`lon` to match the destination catalog format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Budget tier of a destination or a user's declared budget
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Affordable,
    Moderate,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Affordable => "affordable",
            BudgetTier::Moderate => "moderate",
            BudgetTier::Luxury => "luxury",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse climate classification of a weather snapshot or a destination's
/// static weather tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClimateCategory {
    Hot,
    Cold,
    Moderate,
    Tropical,
}

impl ClimateCategory {
    /// All recognized category names, in catalog order
    pub const NAMES: [&'static str; 4] = ["hot", "cold", "moderate", "tropical"];

    /// Parse a category name, returning `None` for anything unrecognized
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "hot" => Some(ClimateCategory::Hot),
            "cold" => Some(ClimateCategory::Cold),
            "moderate" => Some(ClimateCategory::Moderate),
            "tropical" => Some(ClimateCategory::Tropical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateCategory::Hot => "hot",
            ClimateCategory::Cold => "cold",
            ClimateCategory::Moderate => "moderate",
            ClimateCategory::Tropical => "tropical",
        }
    }
}

impl std::fmt::Display for ClimateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

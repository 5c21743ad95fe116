//! Destination catalog models

use serde::{Deserialize, Serialize};

use crate::types::{BudgetTier, ClimateCategory, GpsCoordinates};

/// A travel destination from the static catalog
///
/// Loaded once at process start and immutable thereafter. The `weather`
/// field is the destination's declared climate tag for display; scoring
/// uses live conditions fetched from the weather service at request time,
/// never this tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub weather: ClimateCategory,
    pub budget: BudgetTier,
    pub cuisines: Vec<String>,
    pub description: String,
    pub image_url: String,
    pub coordinates: GpsCoordinates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_deserializes_from_catalog_json() {
        let json = r#"{
            "id": 2,
            "name": "Rome",
            "country": "Italy",
            "weather": "moderate",
            "budget": "luxury",
            "cuisines": ["Italian", "Mediterranean"],
            "description": "Historic city with amazing architecture and food",
            "imageUrl": "https://images.unsplash.com/photo-1552832230-c0197dd311b5",
            "coordinates": { "lat": 41.9028, "lon": 12.4964 }
        }"#;

        let destination: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(destination.id, 2);
        assert_eq!(destination.weather, ClimateCategory::Moderate);
        assert_eq!(destination.budget, BudgetTier::Luxury);
        assert_eq!(destination.coordinates.latitude, 41.9028);
    }
}

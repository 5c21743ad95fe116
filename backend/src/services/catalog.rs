//! Static destination catalog

use crate::error::{AppError, AppResult};
use shared::models::Destination;

/// Embedded reference dataset of travel destinations
const CATALOG_JSON: &str = include_str!("../../data/destinations.json");

/// The destination catalog, loaded once at startup and immutable after
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Parse the embedded catalog; a malformed dataset is a startup error
    pub fn load() -> AppResult<Self> {
        let destinations: Vec<Destination> = serde_json::from_str(CATALOG_JSON)
            .map_err(|e| AppError::Configuration(format!("destination catalog: {}", e)))?;
        Ok(Self { destinations })
    }

    /// Build a catalog from an explicit destination list (for testing)
    pub fn from_destinations(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// All destinations, in catalog order
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Find one destination by its id
    pub fn find(&self, id: u32) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::{BudgetTier, ClimateCategory};

    #[test]
    fn embedded_catalog_parses() {
        let catalog = DestinationCatalog::load().unwrap();
        assert_eq!(catalog.len(), 30);
    }

    #[test]
    fn catalog_entries_are_well_formed() {
        let catalog = DestinationCatalog::load().unwrap();
        for destination in catalog.destinations() {
            assert!(!destination.name.is_empty());
            assert!(!destination.country.is_empty());
            assert!(!destination.cuisines.is_empty());
            assert!(destination.coordinates.latitude.abs() <= 90.0);
            assert!(destination.coordinates.longitude.abs() <= 180.0);
        }
    }

    #[test]
    fn find_known_destination() {
        let catalog = DestinationCatalog::load().unwrap();
        let bali = catalog.find(1).unwrap();
        assert_eq!(bali.name, "Bali");
        assert_eq!(bali.weather, ClimateCategory::Tropical);
        assert_eq!(bali.budget, BudgetTier::Moderate);
        assert!(catalog.find(9999).is_none());
    }
}

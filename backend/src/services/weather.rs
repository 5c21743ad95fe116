//! Weather service: turns raw lookups into classified snapshots

use std::sync::Arc;

use crate::error::AppResult;
use crate::external::weather::WeatherLookup;
use shared::models::{Destination, WeatherSnapshot};

/// Weather service for deriving per-destination snapshots
///
/// Snapshots are recomputed on every request; nothing is cached.
#[derive(Clone)]
pub struct WeatherService {
    lookup: Arc<dyn WeatherLookup>,
}

impl WeatherService {
    pub fn new(lookup: Arc<dyn WeatherLookup>) -> Self {
        Self { lookup }
    }

    /// Fetch and classify today's weather for one destination
    pub async fn snapshot_for(&self, destination: &Destination) -> AppResult<WeatherSnapshot> {
        let measurement = self
            .lookup
            .lookup(
                destination.coordinates.latitude,
                destination.coordinates.longitude,
            )
            .await?;

        Ok(WeatherSnapshot::from_daily(
            measurement.max_temp,
            measurement.min_temp,
            measurement.humidity,
            measurement.precipitation,
            measurement.summary,
        ))
    }
}

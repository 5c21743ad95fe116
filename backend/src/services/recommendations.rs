//! Recommendation pipeline
//!
//! For every catalog destination: fetch today's weather concurrently,
//! score against the user's preferences, drop non-matches, and return a
//! stably sorted list.

use std::sync::Arc;
use tokio::task::JoinSet;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::{DestinationCatalog, PreferenceService, WeatherService};
use shared::models::{score_destination, ScoredDestination, WeatherSnapshot};

/// Recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<DestinationCatalog>,
    preferences: PreferenceService,
    weather: WeatherService,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<DestinationCatalog>,
        preferences: PreferenceService,
        weather: WeatherService,
    ) -> Self {
        Self {
            catalog,
            preferences,
            weather,
        }
    }

    /// Produce the ranked recommendation list for one user
    ///
    /// No stored preferences is a defined state, not a failure: the result
    /// is empty and no weather lookups are issued. Individual lookup
    /// failures are downgraded to a missing snapshot for that destination
    /// only; the request as a whole always succeeds.
    pub async fn get_recommendations(&self, user_id: Uuid) -> AppResult<Vec<ScoredDestination>> {
        let Some(preferences) = self.preferences.get(user_id).await? else {
            return Ok(Vec::new());
        };

        tracing::debug!(%user_id, "generating recommendations");

        let snapshots = self.fetch_snapshots().await;

        let mut scored: Vec<ScoredDestination> = self
            .catalog
            .destinations()
            .iter()
            .zip(snapshots)
            .map(|(destination, snapshot)| {
                let result = score_destination(destination, snapshot.as_ref(), &preferences);
                ScoredDestination {
                    destination: destination.clone(),
                    current_weather: snapshot,
                    match_score: result.score,
                    match_details: result.match_details,
                }
            })
            .filter(|scored| scored.match_score > 0)
            .collect();

        // Stable sort: destinations with equal scores keep catalog order.
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        Ok(scored)
    }

    /// Fan out one weather lookup per destination and join them all
    ///
    /// Lookups are independent; a failure never cancels its siblings. The
    /// returned vector is indexed by catalog position, `None` marking a
    /// failed lookup.
    async fn fetch_snapshots(&self) -> Vec<Option<WeatherSnapshot>> {
        let destinations = self.catalog.destinations();
        let mut snapshots: Vec<Option<WeatherSnapshot>> = vec![None; destinations.len()];

        let mut lookups = JoinSet::new();
        for (index, destination) in destinations.iter().enumerate() {
            let weather = self.weather.clone();
            let destination = destination.clone();
            lookups.spawn(async move {
                let snapshot = weather.snapshot_for(&destination).await;
                (index, destination.name, snapshot)
            });
        }

        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((index, _, Ok(snapshot))) => snapshots[index] = Some(snapshot),
                Ok((_, name, Err(error))) => {
                    tracing::warn!(destination = %name, %error, "weather lookup failed");
                }
                Err(join_error) => {
                    tracing::warn!(%join_error, "weather lookup task panicked");
                }
            }
        }

        snapshots
    }
}

//! Match scoring for destinations against user preferences

use serde::{Deserialize, Serialize};

use crate::models::{is_compatible, Destination, UserPreferences, WeatherSnapshot};

/// Points awarded when the live weather matches the user's preference
pub const WEATHER_POINTS: u32 = 40;
/// Points awarded when the destination's budget tier matches the user's
pub const BUDGET_POINTS: u32 = 30;
/// Points awarded per overlapping cuisine
pub const CUISINE_POINTS: u32 = 10;

/// A criterion that contributed to a destination's match score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchCriterion {
    Weather,
    Budget,
    Cuisine,
}

/// The outcome of scoring one destination against one set of preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub score: u32,
    pub match_details: Vec<MatchCriterion>,
}

/// A destination joined with its live weather and computed match score
///
/// Exists only within one recommendation request/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub destination: Destination,
    pub current_weather: Option<WeatherSnapshot>,
    pub match_score: u32,
    pub match_details: Vec<MatchCriterion>,
}

/// Score one destination against one user's preferences
///
/// Weighted sum of independent criteria: +40 for compatible live weather,
/// +30 for an equal budget tier, +10 per destination cuisine that also
/// appears in the user's food preferences (each distinct cuisine counted
/// once). A destination without a snapshot can never earn the weather
/// bonus but is still scored on budget and cuisine. Pure function, no
/// upper clamp.
pub fn score_destination(
    destination: &Destination,
    snapshot: Option<&WeatherSnapshot>,
    preferences: &UserPreferences,
) -> MatchResult {
    let mut score = 0;
    let mut match_details = Vec::new();

    if let Some(snapshot) = snapshot {
        if is_compatible(snapshot.category, &preferences.weather) {
            score += WEATHER_POINTS;
            match_details.push(MatchCriterion::Weather);
        }
    }

    if destination.budget == preferences.budget {
        score += BUDGET_POINTS;
        match_details.push(MatchCriterion::Budget);
    }

    let matching_cuisines = destination
        .cuisines
        .iter()
        .filter(|cuisine| preferences.food_preferences.contains(cuisine))
        .count() as u32;
    if matching_cuisines > 0 {
        score += CUISINE_POINTS * matching_cuisines;
        match_details.push(MatchCriterion::Cuisine);
    }

    MatchResult {
        score,
        match_details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BudgetTier, ClimateCategory, GpsCoordinates};
    use uuid::Uuid;

    fn rome() -> Destination {
        Destination {
            id: 2,
            name: "Rome".to_string(),
            country: "Italy".to_string(),
            weather: ClimateCategory::Moderate,
            budget: BudgetTier::Luxury,
            cuisines: vec!["Italian".to_string(), "Mediterranean".to_string()],
            description: "Historic city with amazing architecture and food".to_string(),
            image_url: String::new(),
            coordinates: GpsCoordinates::new(41.9028, 12.4964),
        }
    }

    fn prefs(budget: BudgetTier, weather: &str, cuisines: &[&str]) -> UserPreferences {
        UserPreferences::new(
            Uuid::new_v4(),
            budget,
            weather,
            cuisines.iter().map(|c| c.to_string()).collect(),
        )
    }

    fn moderate_snapshot() -> WeatherSnapshot {
        WeatherSnapshot::from_daily(22.0, 14.0, 55.0, 0.0, "Partly sunny")
    }

    #[test]
    fn full_match_scores_eighty() {
        let preferences = prefs(BudgetTier::Luxury, "moderate", &["Italian"]);
        let snapshot = moderate_snapshot();

        let result = score_destination(&rome(), Some(&snapshot), &preferences);
        assert_eq!(result.score, 80);
        assert_eq!(
            result.match_details,
            vec![
                MatchCriterion::Weather,
                MatchCriterion::Budget,
                MatchCriterion::Cuisine
            ]
        );
    }

    #[test]
    fn no_criteria_match_scores_zero() {
        let preferences = prefs(BudgetTier::Moderate, "cold", &["French"]);
        let snapshot = moderate_snapshot();

        let result = score_destination(&rome(), Some(&snapshot), &preferences);
        assert_eq!(result.score, 0);
        assert!(result.match_details.is_empty());
    }

    #[test]
    fn missing_snapshot_forfeits_only_the_weather_bonus() {
        let preferences = prefs(BudgetTier::Luxury, "moderate", &["Italian"]);

        let result = score_destination(&rome(), None, &preferences);
        assert_eq!(result.score, 40);
        assert_eq!(
            result.match_details,
            vec![MatchCriterion::Budget, MatchCriterion::Cuisine]
        );
    }

    #[test]
    fn each_overlapping_cuisine_adds_ten() {
        let one = prefs(BudgetTier::Affordable, "cold", &["Italian"]);
        let two = prefs(BudgetTier::Affordable, "cold", &["Italian", "Mediterranean"]);

        let destination = rome();
        let single = score_destination(&destination, None, &one);
        let double = score_destination(&destination, None, &two);

        assert_eq!(single.score, 10);
        assert_eq!(double.score, 20);
        assert_eq!(double.score, single.score + CUISINE_POINTS);
        assert_eq!(double.match_details, vec![MatchCriterion::Cuisine]);
    }

    #[test]
    fn cuisine_overlap_counts_distinct_names_once() {
        // Duplicated entries on the user side must not double-count a
        // destination cuisine.
        let preferences = prefs(BudgetTier::Affordable, "cold", &["Italian", "Italian"]);

        let result = score_destination(&rome(), None, &preferences);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn match_details_serialize_lowercase() {
        let json = serde_json::to_string(&vec![
            MatchCriterion::Weather,
            MatchCriterion::Budget,
            MatchCriterion::Cuisine,
        ])
        .unwrap();
        assert_eq!(json, r#"["weather","budget","cuisine"]"#);
    }
}

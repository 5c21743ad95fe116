//! Match scoring tests
//!
//! Property-based coverage for the weighted scorer plus the wire shape
//! of a scored recommendation entry.

use proptest::prelude::*;
use uuid::Uuid;

use shared::models::{
    is_compatible, score_destination, Destination, MatchCriterion, ScoredDestination,
    UserPreferences, WeatherSnapshot, BUDGET_POINTS, CUISINE_POINTS, WEATHER_POINTS,
};
use shared::types::{BudgetTier, ClimateCategory, GpsCoordinates};

const CUISINES: &[&str] = &[
    "Italian",
    "Thai",
    "Mediterranean",
    "Asian",
    "Local",
    "French",
];

fn budget_strategy() -> impl Strategy<Value = BudgetTier> {
    prop_oneof![
        Just(BudgetTier::Affordable),
        Just(BudgetTier::Moderate),
        Just(BudgetTier::Luxury),
    ]
}

fn cuisines_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(CUISINES.to_vec(), 1..=4)
        .prop_map(|picked| picked.into_iter().map(String::from).collect())
}

fn destination_strategy() -> impl Strategy<Value = Destination> {
    (budget_strategy(), cuisines_strategy()).prop_map(|(budget, cuisines)| Destination {
        id: 1,
        name: "Somewhere".to_string(),
        country: "Somewhere".to_string(),
        weather: ClimateCategory::Moderate,
        budget,
        cuisines,
        description: String::new(),
        image_url: String::new(),
        coordinates: GpsCoordinates::new(0.0, 0.0),
    })
}

fn preferences_strategy() -> impl Strategy<Value = UserPreferences> {
    (
        budget_strategy(),
        prop_oneof![
            Just("hot"),
            Just("cold"),
            Just("moderate"),
            Just("tropical"),
        ],
        cuisines_strategy(),
    )
        .prop_map(|(budget, weather, foods)| {
            UserPreferences::new(Uuid::new_v4(), budget, weather, foods)
        })
}

fn snapshot_strategy() -> impl Strategy<Value = Option<WeatherSnapshot>> {
    proptest::option::of(((-20.0..45.0f64), (0.0..100.0f64), (0.0..30.0f64)).prop_map(
        |(mean, humidity, precipitation)| {
            WeatherSnapshot::from_daily(mean + 3.0, mean - 3.0, humidity, precipitation, "Any")
        },
    ))
}

proptest! {
    /// The score is exactly the sum of its three independent components
    #[test]
    fn score_decomposes_into_components(
        destination in destination_strategy(),
        snapshot in snapshot_strategy(),
        preferences in preferences_strategy(),
    ) {
        let result = score_destination(&destination, snapshot.as_ref(), &preferences);

        let weather = match &snapshot {
            Some(s) if is_compatible(s.category, &preferences.weather) => WEATHER_POINTS,
            _ => 0,
        };
        let budget = if destination.budget == preferences.budget {
            BUDGET_POINTS
        } else {
            0
        };
        let overlap = destination
            .cuisines
            .iter()
            .filter(|c| preferences.food_preferences.contains(c))
            .count() as u32;

        prop_assert_eq!(result.score, weather + budget + overlap * CUISINE_POINTS);
    }

    /// The score is zero exactly when no criterion is recorded
    #[test]
    fn zero_score_means_empty_details(
        destination in destination_strategy(),
        snapshot in snapshot_strategy(),
        preferences in preferences_strategy(),
    ) {
        let result = score_destination(&destination, snapshot.as_ref(), &preferences);
        prop_assert_eq!(result.score == 0, result.match_details.is_empty());
    }

    /// Without a snapshot the weather criterion can never be earned
    #[test]
    fn missing_snapshot_never_earns_weather(
        destination in destination_strategy(),
        preferences in preferences_strategy(),
    ) {
        let result = score_destination(&destination, None, &preferences);
        prop_assert!(!result.match_details.contains(&MatchCriterion::Weather));
        prop_assert!(result.score <= BUDGET_POINTS + 4 * CUISINE_POINTS);
    }
}

/// A scored entry serializes flat: destination fields beside the
/// score, with `currentWeather` nullable and camelCase keys.
#[test]
fn scored_destination_wire_shape() {
    let destination = Destination {
        id: 1,
        name: "Bali".to_string(),
        country: "Indonesia".to_string(),
        weather: ClimateCategory::Tropical,
        budget: BudgetTier::Moderate,
        cuisines: vec!["Asian".to_string(), "Local".to_string()],
        description: "Tropical paradise".to_string(),
        image_url: "https://example.com/bali.jpg".to_string(),
        coordinates: GpsCoordinates::new(-8.4095, 115.1889),
    };
    let snapshot = WeatherSnapshot::from_daily(33.0, 27.0, 78.0, 2.0, "Humid");

    let scored = ScoredDestination {
        destination,
        current_weather: Some(snapshot),
        match_score: 80,
        match_details: vec![MatchCriterion::Weather, MatchCriterion::Budget],
    };

    let value: serde_json::Value = serde_json::to_value(&scored).unwrap();
    assert_eq!(value["name"], "Bali");
    assert_eq!(value["imageUrl"], "https://example.com/bali.jpg");
    assert_eq!(value["coordinates"]["lat"], -8.4095);
    assert_eq!(value["matchScore"], 80);
    assert_eq!(value["matchDetails"][0], "weather");
    assert_eq!(value["currentWeather"]["type"], "tropical");

    let degraded = ScoredDestination {
        current_weather: None,
        ..scored
    };
    let value = serde_json::to_value(&degraded).unwrap();
    assert!(value["currentWeather"].is_null());
}

//! Flight search client
//!
//! Thin pass-through over a Sky-Scrapper-style API. Itineraries are
//! flattened into `FlightOption`s; seat availability is fabricated because
//! the upstream API does not provide it.

use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::FlightsConfig;
use crate::error::{AppError, AppResult};

/// Sky ID and entity ID pair identifying a city to the upstream API
#[derive(Debug, Clone, Copy)]
pub struct CityIds {
    pub sky_id: &'static str,
    pub entity_id: &'static str,
}

/// Known city identifiers for major destinations
const KNOWN_CITIES: &[(&str, CityIds)] = &[
    ("London", CityIds { sky_id: "LOND", entity_id: "27544008" }),
    ("New York", CityIds { sky_id: "NYCA", entity_id: "27537542" }),
    ("Tokyo", CityIds { sky_id: "TYOA", entity_id: "27542699" }),
    ("Paris", CityIds { sky_id: "PARI", entity_id: "27539733" }),
    ("Dubai", CityIds { sky_id: "DXBA", entity_id: "27537447" }),
];

/// One bookable flight option
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOption {
    pub id: String,
    pub price: f64,
    pub currency: String,
    pub airline: String,
    pub departure: FlightLegPoint,
    pub arrival: FlightLegPoint,
    pub duration_minutes: u32,
    pub stops: u32,
    #[serde(rename = "return")]
    pub return_leg: Option<ReturnLeg>,
    /// Simulated, the upstream API does not expose seat counts
    pub available_seats: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLegPoint {
    pub airport: String,
    pub time: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLeg {
    pub departure: FlightLegPoint,
    pub arrival: FlightLegPoint,
    pub duration_minutes: u32,
    pub stops: u32,
}

/// Upstream search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    #[serde(default)]
    itineraries: Vec<Itinerary>,
}

#[derive(Debug, Deserialize)]
struct Itinerary {
    id: String,
    price: ItineraryPrice,
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct ItineraryPrice {
    raw: f64,
}

#[derive(Debug, Deserialize)]
struct Leg {
    origin: LegAirport,
    destination: LegAirport,
    departure: String,
    arrival: String,
    #[serde(rename = "durationInMinutes")]
    duration_in_minutes: u32,
    #[serde(rename = "stopCount")]
    stop_count: u32,
    carriers: Carriers,
}

#[derive(Debug, Deserialize)]
struct LegAirport {
    #[serde(rename = "displayCode")]
    display_code: String,
    city: String,
}

#[derive(Debug, Deserialize)]
struct Carriers {
    marketing: Vec<Carrier>,
}

#[derive(Debug, Deserialize)]
struct Carrier {
    name: String,
}

/// Flight search API client
#[derive(Clone)]
pub struct FlightClient {
    client: Client,
    api_key: String,
    api_host: String,
    base_url: String,
}

impl FlightClient {
    /// Create a new FlightClient from configuration
    pub fn new(config: &FlightsConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            base_url: config.api_endpoint.clone(),
        }
    }

    /// Resolve a city name to its known upstream identifiers
    pub fn city_ids(city: &str) -> Option<CityIds> {
        KNOWN_CITIES
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, ids)| *ids)
    }

    /// Search one-way or return flights between two known cities
    pub async fn search_flights(
        &self,
        origin: &str,
        destination: &str,
        date: &str,
        passengers: u32,
    ) -> AppResult<Vec<FlightOption>> {
        let origin_ids = Self::city_ids(origin)
            .ok_or_else(|| AppError::NotFound(format!("Origin city '{}'", origin)))?;
        let dest_ids = Self::city_ids(destination)
            .ok_or_else(|| AppError::NotFound(format!("Destination city '{}'", destination)))?;

        tracing::info!(origin, destination, date, "searching flights");

        let url = format!("{}/api/v2/flights/searchFlights", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("originSkyId", origin_ids.sky_id),
                ("destinationSkyId", dest_ids.sky_id),
                ("originEntityId", origin_ids.entity_id),
                ("destinationEntityId", dest_ids.entity_id),
                ("date", date),
                ("cabinClass", "economy"),
                ("adults", &passengers.to_string()),
                ("sortBy", "best"),
                ("currency", "USD"),
                ("market", "en-US"),
                ("countryCode", "US"),
            ])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("flight request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "flight API returned {}",
                response.status()
            )));
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("malformed flight payload: {}", e)))?;

        Ok(Self::process_itineraries(data))
    }

    /// Flatten upstream itineraries into flight options
    fn process_itineraries(response: SearchResponse) -> Vec<FlightOption> {
        let Some(data) = response.data else {
            return Vec::new();
        };

        let mut rng = rand::thread_rng();
        data.itineraries
            .into_iter()
            .filter_map(|itinerary| {
                let outbound = itinerary.legs.first()?;
                let return_leg = itinerary.legs.get(1).map(Self::convert_return_leg);

                Some(FlightOption {
                    id: itinerary.id.clone(),
                    price: itinerary.price.raw,
                    currency: "USD".to_string(),
                    airline: outbound
                        .carriers
                        .marketing
                        .first()
                        .map(|c| c.name.clone())
                        .unwrap_or_default(),
                    departure: FlightLegPoint {
                        airport: outbound.origin.display_code.clone(),
                        time: outbound.departure.clone(),
                        city: outbound.origin.city.clone(),
                    },
                    arrival: FlightLegPoint {
                        airport: outbound.destination.display_code.clone(),
                        time: outbound.arrival.clone(),
                        city: outbound.destination.city.clone(),
                    },
                    duration_minutes: outbound.duration_in_minutes,
                    stops: outbound.stop_count,
                    return_leg,
                    available_seats: rng.gen_range(1..=30),
                })
            })
            .collect()
    }

    fn convert_return_leg(leg: &Leg) -> ReturnLeg {
        ReturnLeg {
            departure: FlightLegPoint {
                airport: leg.origin.display_code.clone(),
                time: leg.departure.clone(),
                city: leg.origin.city.clone(),
            },
            arrival: FlightLegPoint {
                airport: leg.destination.display_code.clone(),
                time: leg.arrival.clone(),
                city: leg.destination.city.clone(),
            },
            duration_minutes: leg.duration_in_minutes,
            stops: leg.stop_count,
        }
    }
}

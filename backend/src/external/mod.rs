//! External API integrations

pub mod flights;
pub mod weather;

pub use flights::FlightClient;
pub use weather::{WeatherClient, WeatherLookup, WeatherMeasurement};

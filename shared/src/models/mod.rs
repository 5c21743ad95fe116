//! Domain models for the Travel Advisor platform

mod destination;
mod preferences;
mod scoring;
mod user;
mod weather;

pub use destination::*;
pub use preferences::*;
pub use scoring::*;
pub use user::*;
pub use weather::*;

//! Shared types and models for the Travel Advisor platform
//!
//! This crate contains the domain model and the pure recommendation logic
//! (weather classification, preference compatibility, match scoring) shared
//! between the backend and any other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

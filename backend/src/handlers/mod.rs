//! HTTP handlers for the Travel Advisor backend

pub mod auth;
pub mod destinations;
pub mod flights;
pub mod preferences;
pub mod recommendations;
pub mod weather;

pub use auth::*;
pub use destinations::*;
pub use flights::*;
pub use preferences::*;
pub use recommendations::*;
pub use weather::*;

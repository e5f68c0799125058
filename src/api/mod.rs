//! HTTP API handlers

pub mod health;
pub mod recommendations;

pub use health::health_routes;
pub use recommendations::get_recommendation;

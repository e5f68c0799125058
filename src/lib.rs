//! # MoodTune
//!
//! Mood-based music recommendation service: given a mood and a city,
//! fetches current weather (OpenWeather) and a song suggestion
//! (Last.fm tag search), decides whether the mood is congruent with
//! the weather via a static rule table, and returns a composed,
//! explained recommendation.

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use services::recommendation::RecommendationEngine;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: RecommendationEngine,
}

impl AppState {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self { engine }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(api::get_recommendation))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! MoodTune service entry point

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use moodtune::config::Config;
use moodtune::services::music::{LastFmClient, MoodMusicPicker};
use moodtune::services::recommendation::RecommendationEngine;
use moodtune::services::weather::OpenWeatherClient;
use moodtune::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting MoodTune v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    if config.openweather_api_key.is_none() {
        info!("OPENWEATHER_API_KEY not set - weather requests will fail until configured");
    }
    if config.lastfm_api_key.is_none() {
        info!("LASTFM_API_KEY not set - music requests will fail until configured");
    }

    let weather = Arc::new(OpenWeatherClient::new(&config)?);
    let lastfm = Arc::new(LastFmClient::new(&config)?);
    let music = Arc::new(MoodMusicPicker::new(lastfm));

    let engine = RecommendationEngine::new(weather, music);
    let state = AppState::new(engine);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("moodtune listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

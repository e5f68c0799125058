//! Upstream collaborators and the pure recommendation core

use async_trait::async_trait;

use crate::error::{MusicServiceError, WeatherServiceError};
use crate::models::{Mood, SongRecommendation, WeatherSnapshot};

pub mod explanation;
pub mod mood;
pub mod music;
pub mod recommendation;
pub mod weather;

/// Source of current weather for a city.
///
/// Implemented by [`weather::OpenWeatherClient`]; tests substitute
/// in-memory fakes so the pipeline can run without the network.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherServiceError>;
}

/// Source of one song recommendation for a mood.
///
/// Implemented by [`music::MoodMusicPicker`].
#[async_trait]
pub trait SongProvider: Send + Sync {
    async fn recommend_song(&self, mood: Mood) -> Result<SongRecommendation, MusicServiceError>;
}

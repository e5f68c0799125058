//! Recommendation pipeline
//!
//! Linear orchestration over the two injected providers: fetch weather,
//! check compatibility, fetch song, compose explanation, assemble.
//! All-or-nothing: the first upstream failure aborts the request and
//! no partial response is ever produced.

use std::sync::Arc;

use crate::error::RecommendationError;
use crate::models::{Mood, RecommendationResult};
use crate::services::{explanation, mood as mood_rules, SongProvider, WeatherProvider};

/// Orchestrates one recommendation per inbound request
#[derive(Clone)]
pub struct RecommendationEngine {
    weather: Arc<dyn WeatherProvider>,
    music: Arc<dyn SongProvider>,
}

impl RecommendationEngine {
    pub fn new(weather: Arc<dyn WeatherProvider>, music: Arc<dyn SongProvider>) -> Self {
        Self { weather, music }
    }

    /// Run the full pipeline for one (mood, city) request.
    ///
    /// A weather failure short-circuits before the music provider is
    /// invoked; a music failure discards the weather already fetched.
    pub async fn recommend(
        &self,
        mood: Mood,
        city: &str,
    ) -> Result<RecommendationResult, RecommendationError> {
        let weather = self.weather.current_weather(city).await?;

        let matches = mood_rules::is_compatible(mood, &weather);

        let song = self.music.recommend_song(mood).await?;

        let explanation = explanation::compose(mood, &weather, &song, city, matches);

        tracing::info!(
            mood = %mood,
            city = %city,
            matches = matches,
            song = %song.title,
            artist = %song.artist,
            "Recommendation assembled"
        );

        Ok(RecommendationResult {
            mood,
            city: city.to_string(),
            weather,
            mood_matches_weather: matches,
            recommendation: song,
            explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MusicServiceError, WeatherServiceError};
    use crate::models::{SongRecommendation, TemperatureCategory, WeatherCondition, WeatherSnapshot};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FixedWeather(WeatherSnapshot);

    #[async_trait]
    impl WeatherProvider for FixedWeather {
        async fn current_weather(
            &self,
            _city: &str,
        ) -> Result<WeatherSnapshot, WeatherServiceError> {
            Ok(self.0.clone())
        }
    }

    struct FailingWeather;

    #[async_trait]
    impl WeatherProvider for FailingWeather {
        async fn current_weather(
            &self,
            city: &str,
        ) -> Result<WeatherSnapshot, WeatherServiceError> {
            Err(WeatherServiceError::CityNotFound(city.to_string()))
        }
    }

    struct FixedSong {
        song: SongRecommendation,
        invoked: Arc<AtomicBool>,
    }

    #[async_trait]
    impl SongProvider for FixedSong {
        async fn recommend_song(
            &self,
            _mood: Mood,
        ) -> Result<SongRecommendation, MusicServiceError> {
            self.invoked.store(true, Ordering::SeqCst);
            Ok(self.song.clone())
        }
    }

    fn clear_mild() -> WeatherSnapshot {
        WeatherSnapshot {
            condition: WeatherCondition::Clear,
            temperature: 20.0,
            temperature_category: TemperatureCategory::Mild,
            humidity: 45.0,
            wind_speed: 3.2,
            description: "clear sky".to_string(),
        }
    }

    fn a_song() -> SongRecommendation {
        SongRecommendation {
            title: "Walking on Sunshine".to_string(),
            artist: "Katrina and the Waves".to_string(),
            url: Some("https://example.org/song".to_string()),
        }
    }

    #[tokio::test]
    async fn test_assembles_full_result() {
        let engine = RecommendationEngine::new(
            Arc::new(FixedWeather(clear_mild())),
            Arc::new(FixedSong {
                song: a_song(),
                invoked: Arc::new(AtomicBool::new(false)),
            }),
        );

        let result = engine.recommend(Mood::Happy, "London").await.unwrap();

        assert_eq!(result.mood, Mood::Happy);
        assert_eq!(result.city, "London");
        assert!(result.mood_matches_weather);
        assert_eq!(result.recommendation, a_song());
        assert!(result.explanation.contains("happy"));
        assert!(result.explanation.contains("London"));
        assert!(result.explanation.contains("Walking on Sunshine"));
        assert!(result.explanation.contains("Katrina and the Waves"));
    }

    #[tokio::test]
    async fn test_weather_failure_short_circuits_before_music() {
        let invoked = Arc::new(AtomicBool::new(false));
        let engine = RecommendationEngine::new(
            Arc::new(FailingWeather),
            Arc::new(FixedSong {
                song: a_song(),
                invoked: invoked.clone(),
            }),
        );

        let result = engine.recommend(Mood::Happy, "Nowhereville").await;

        assert!(matches!(result, Err(RecommendationError::Weather(_))));
        assert!(!invoked.load(Ordering::SeqCst), "music provider must not be called");
    }

    #[tokio::test]
    async fn test_music_failure_yields_no_partial_result() {
        struct FailingSong;

        #[async_trait]
        impl SongProvider for FailingSong {
            async fn recommend_song(
                &self,
                _mood: Mood,
            ) -> Result<SongRecommendation, MusicServiceError> {
                Err(MusicServiceError::Status(502))
            }
        }

        let engine = RecommendationEngine::new(
            Arc::new(FixedWeather(clear_mild())),
            Arc::new(FailingSong),
        );

        let result = engine.recommend(Mood::Calm, "Oslo").await;
        assert!(matches!(result, Err(RecommendationError::Music(_))));
    }
}

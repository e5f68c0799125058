//! Core data types: closed mood/weather enumerations and the
//! request/response shapes of the recommendation API.

use serde::{Deserialize, Serialize};

/// User-declared mood, one of 8 closed values
///
/// Validated at the HTTP boundary by serde; the core never sees
/// an out-of-range mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Calm,
    Energetic,
    Romantic,
    Angry,
    Anxious,
    Relaxed,
}

impl Mood {
    /// Lowercase wire name, also used in explanation text
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Romantic => "romantic",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Relaxed => "relaxed",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized sky/precipitation state
///
/// Derived from the provider's free-text condition label; unrecognized
/// labels degrade to `Clear` at the normalization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Drizzle,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Clouds => "clouds",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Thunderstorm => "thunderstorm",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Mist => "mist",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Drizzle => "drizzle",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discretized temperature bucket, derived from a Celsius reading
/// via fixed half-open intervals (see `services::weather`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCategory {
    Freezing,
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
}

impl TemperatureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureCategory::Freezing => "freezing",
            TemperatureCategory::Cold => "cold",
            TemperatureCategory::Cool => "cool",
            TemperatureCategory::Mild => "mild",
            TemperatureCategory::Warm => "warm",
            TemperatureCategory::Hot => "hot",
        }
    }
}

impl std::fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current weather for a city, normalized from the provider payload.
/// Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub condition: WeatherCondition,
    /// Temperature in degrees Celsius, as reported by the provider
    pub temperature: f64,
    pub temperature_category: TemperatureCategory,
    /// Relative humidity in percent
    pub humidity: f64,
    pub wind_speed: f64,
    /// Provider's free-text description (e.g. "light rain")
    pub description: String,
}

/// One recommended song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecommendation {
    pub title: String,
    pub artist: String,
    pub url: Option<String>,
}

/// Inbound request body for POST /api/v1/recommendations
#[derive(Debug, Clone, Deserialize)]
pub struct MoodRequest {
    pub mood: Mood,
    pub city: String,
}

/// Composed response: weather, match decision, song and explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub mood: Mood,
    pub city: String,
    pub weather: WeatherSnapshot,
    pub mood_matches_weather: bool,
    pub recommendation: SongRecommendation,
    pub explanation: String,
}

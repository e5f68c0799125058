//! OpenWeather client and weather normalization
//!
//! The client fetches current weather by city (metric units) and the
//! normalizer maps the raw payload into the closed condition and
//! temperature categories. Normalization is deliberately lossy:
//! an unrecognized condition label degrades to `clear` and an
//! out-of-range temperature to `mild` rather than failing the request.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::WeatherServiceError;
use crate::models::{TemperatureCategory, WeatherCondition, WeatherSnapshot};
use crate::services::WeatherProvider;

const USER_AGENT: &str = concat!("moodtune/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Half-open `[min, max)` temperature intervals in Celsius, scanned in order
const TEMPERATURE_RANGES: [(TemperatureCategory, f64, f64); 6] = [
    (TemperatureCategory::Freezing, -50.0, 0.0),
    (TemperatureCategory::Cold, 0.0, 10.0),
    (TemperatureCategory::Cool, 10.0, 18.0),
    (TemperatureCategory::Mild, 18.0, 24.0),
    (TemperatureCategory::Warm, 24.0, 30.0),
    (TemperatureCategory::Hot, 30.0, 50.0),
];

/// Map an OpenWeather `weather[0].main` label to a normalized condition.
///
/// Case-sensitive exact match on the provider vocabulary; anything
/// unrecognized resolves to `Clear`.
pub fn condition_from_label(label: &str) -> WeatherCondition {
    match label {
        "Clear" => WeatherCondition::Clear,
        "Clouds" => WeatherCondition::Clouds,
        "Rain" => WeatherCondition::Rain,
        "Drizzle" => WeatherCondition::Drizzle,
        "Thunderstorm" | "Squall" | "Tornado" => WeatherCondition::Thunderstorm,
        "Snow" => WeatherCondition::Snow,
        "Mist" | "Smoke" | "Haze" | "Dust" | "Sand" | "Ash" => WeatherCondition::Mist,
        "Fog" => WeatherCondition::Fog,
        _ => WeatherCondition::Clear,
    }
}

/// Bucket a Celsius reading into a temperature category.
///
/// First matching `[min, max)` interval wins; a reading outside every
/// interval defaults to `Mild`.
pub fn categorize_temperature(temp: f64) -> TemperatureCategory {
    for (category, min, max) in TEMPERATURE_RANGES {
        if temp >= min && temp < max {
            return category;
        }
    }
    TemperatureCategory::Mild
}

/// OpenWeather current-weather response (the fields we consume)
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub weather: Vec<WeatherEntry>,
    pub main: MainMetrics,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherEntry {
    /// Primary condition label, e.g. "Clear", "Rain"
    pub main: String,
    /// Free-text description, e.g. "light rain"
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainMetrics {
    /// Temperature in Celsius (metric units requested)
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Normalize a provider payload into a [`WeatherSnapshot`].
///
/// Only an empty `weather` array is an error; every condition label and
/// temperature value maps to some category.
pub fn normalize(data: CurrentWeatherResponse) -> Result<WeatherSnapshot, WeatherServiceError> {
    let entry = data.weather.into_iter().next().ok_or_else(|| {
        WeatherServiceError::MalformedResponse("empty weather array".to_string())
    })?;

    Ok(WeatherSnapshot {
        condition: condition_from_label(&entry.main),
        temperature: data.main.temp,
        temperature_category: categorize_temperature(data.main.temp),
        humidity: data.main.humidity,
        wind_speed: data.wind.speed,
        description: entry.description,
    })
}

/// OpenWeather API client
pub struct OpenWeatherClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(config: &Config) -> Result<Self, WeatherServiceError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| WeatherServiceError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: config.openweather_api_key.clone(),
            base_url: config.openweather_base_url.clone(),
        })
    }

    /// Fetch and normalize current weather for a city
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, WeatherServiceError> {
        // Fail fast without touching the network when unconfigured
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WeatherServiceError::MissingApiKey)?;

        let url = format!("{}/weather", self.base_url);

        tracing::debug!(city = %city, "Querying OpenWeather API");

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| WeatherServiceError::Transport(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherServiceError::CityNotFound(city.to_string()));
        }

        if !status.is_success() {
            return Err(WeatherServiceError::Status(status.as_u16()));
        }

        let data: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherServiceError::MalformedResponse(e.to_string()))?;

        let snapshot = normalize(data)?;

        tracing::info!(
            city = %city,
            condition = %snapshot.condition,
            temperature = snapshot.temperature,
            category = %snapshot.temperature_category,
            "Retrieved current weather"
        );

        Ok(snapshot)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherServiceError> {
        self.fetch_current(city).await
    }
}

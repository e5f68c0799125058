//! Service error taxonomy
//!
//! Each upstream collaborator surfaces exactly one typed error; the
//! recommendation pipeline wraps both and the API layer maps them to
//! HTTP statuses. No component performs local recovery.

use thiserror::Error;

/// Errors raised by the weather collaborator
#[derive(Debug, Error)]
pub enum WeatherServiceError {
    /// Provider answered 404 for the requested city
    #[error("city '{0}' not found")]
    CityNotFound(String),

    /// Could not reach the provider at all
    #[error("error connecting to weather service: {0}")]
    Transport(String),

    /// Provider answered with a non-success status other than 404
    #[error("weather service returned status code {0}")]
    Status(u16),

    /// OPENWEATHER_API_KEY absent from the environment
    #[error("OpenWeather API key is not configured")]
    MissingApiKey,

    /// Provider answered 2xx but the payload did not match the contract
    #[error("malformed weather response: {0}")]
    MalformedResponse(String),
}

/// Errors raised by the music collaborator
#[derive(Debug, Error)]
pub enum MusicServiceError {
    /// Could not reach the provider at all
    #[error("error connecting to music service: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("music service returned status code {0}")]
    Status(u16),

    /// LASTFM_API_KEY absent from the environment
    #[error("Last.fm API key is not configured")]
    MissingApiKey,

    /// Provider answered 2xx but the payload did not match the contract
    #[error("malformed music response: {0}")]
    MalformedResponse(String),
}

/// Pipeline-level error returned by the orchestrator.
///
/// The Display strings double as the `detail` prefixes of the HTTP
/// error responses.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherServiceError),

    #[error("Music service error: {0}")]
    Music(#[from] MusicServiceError),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

//! Natural-language explanation of the recommendation
//!
//! Two fixed templates keyed by the match decision; mood, weather
//! description, city, song title and artist are interpolated verbatim.
//! Cannot fail for well-typed inputs.

use crate::models::{Mood, SongRecommendation, WeatherSnapshot};

/// Compose the explanation string for a recommendation.
pub fn compose(
    mood: Mood,
    weather: &WeatherSnapshot,
    song: &SongRecommendation,
    city: &str,
    matches: bool,
) -> String {
    let weather_desc = format!(
        "{} and {}",
        weather.temperature_category, weather.condition
    );

    if matches {
        format!(
            "Your {mood} mood aligns well with the current {weather_desc} weather in {city}. \
             We've recommended '{title}' by '{artist}' to complement your mood.",
            title = song.title,
            artist = song.artist,
        )
    } else {
        format!(
            "Your {mood} mood doesn't quite match the current {weather_desc} weather in {city}. \
             We've recommended '{title}' by '{artist}' to enhance your mood regardless of the weather.",
            title = song.title,
            artist = song.artist,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TemperatureCategory, WeatherCondition};

    fn weather() -> WeatherSnapshot {
        WeatherSnapshot {
            condition: WeatherCondition::Clear,
            temperature: 22.5,
            temperature_category: TemperatureCategory::Mild,
            humidity: 45.0,
            wind_speed: 3.2,
            description: "clear sky".to_string(),
        }
    }

    fn song() -> SongRecommendation {
        SongRecommendation {
            title: "Here Comes the Sun".to_string(),
            artist: "The Beatles".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_matching_explanation() {
        let text = compose(Mood::Happy, &weather(), &song(), "London", true);

        assert!(text.contains("aligns well"));
        assert!(text.contains("happy"));
        assert!(text.contains("mild and clear"));
        assert!(text.contains("London"));
        assert!(text.contains("Here Comes the Sun"));
        assert!(text.contains("The Beatles"));
    }

    #[test]
    fn test_non_matching_explanation() {
        let text = compose(Mood::Sad, &weather(), &song(), "Paris", false);

        assert!(text.contains("doesn't quite match"));
        assert!(text.contains("sad"));
        assert!(text.contains("Paris"));
        assert!(text.contains("Here Comes the Sun"));
        assert!(text.contains("The Beatles"));
    }

    #[test]
    fn test_interpolation_is_verbatim() {
        let odd_song = SongRecommendation {
            title: "It's \"Complicated\" <tag>".to_string(),
            artist: "A & B".to_string(),
            url: None,
        };
        let text = compose(Mood::Calm, &weather(), &odd_song, "São Paulo", true);

        assert!(text.contains("It's \"Complicated\" <tag>"));
        assert!(text.contains("A & B"));
        assert!(text.contains("São Paulo"));
    }
}

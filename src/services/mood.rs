//! Mood/weather compatibility rule engine
//!
//! A static per-mood table lists compatible conditions and temperature
//! categories plus a combinator: `All` moods match only when both
//! signals align, `Any` moods match on either signal alone.

use crate::models::{Mood, TemperatureCategory, WeatherCondition, WeatherSnapshot};

use TemperatureCategory::*;
use WeatherCondition::*;

/// How the condition and temperature signals combine into a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Condition AND temperature must both be compatible
    All,
    /// Either compatible condition OR compatible temperature suffices
    Any,
}

/// Static compatibility criteria for one mood
#[derive(Debug, Clone, Copy)]
pub struct MoodCompatibilityRule {
    pub conditions: &'static [WeatherCondition],
    pub temperatures: &'static [TemperatureCategory],
    pub combinator: Combinator,
}

/// Compatibility rule for a mood. Total over the closed `Mood` enum.
pub fn rule_for(mood: Mood) -> MoodCompatibilityRule {
    match mood {
        Mood::Happy => MoodCompatibilityRule {
            conditions: &[Clear, Clouds],
            temperatures: &[Mild, Warm],
            combinator: Combinator::Any,
        },
        Mood::Sad => MoodCompatibilityRule {
            conditions: &[Rain, Drizzle, Mist, Fog],
            temperatures: &[Cold, Cool],
            combinator: Combinator::Any,
        },
        Mood::Calm => MoodCompatibilityRule {
            conditions: &[Clear, Clouds],
            temperatures: &[Mild],
            combinator: Combinator::All,
        },
        Mood::Energetic => MoodCompatibilityRule {
            conditions: &[Clear],
            temperatures: &[Mild, Warm],
            combinator: Combinator::Any,
        },
        Mood::Romantic => MoodCompatibilityRule {
            conditions: &[Clear, Drizzle],
            temperatures: &[Mild, Cool],
            combinator: Combinator::Any,
        },
        Mood::Angry => MoodCompatibilityRule {
            conditions: &[Thunderstorm],
            temperatures: &[Hot],
            combinator: Combinator::Any,
        },
        Mood::Anxious => MoodCompatibilityRule {
            conditions: &[Thunderstorm, Fog, Mist],
            temperatures: &[Freezing, Hot],
            combinator: Combinator::Any,
        },
        Mood::Relaxed => MoodCompatibilityRule {
            conditions: &[Clear, Clouds],
            temperatures: &[Mild, Warm],
            combinator: Combinator::All,
        },
    }
}

/// Decide whether a mood is congruent with the current weather.
///
/// Pure and total: every (mood, weather) pair yields a boolean.
pub fn is_compatible(mood: Mood, weather: &WeatherSnapshot) -> bool {
    let rule = rule_for(mood);

    let condition_match = rule.conditions.contains(&weather.condition);
    let temperature_match = rule.temperatures.contains(&weather.temperature_category);

    match rule.combinator {
        Combinator::All => condition_match && temperature_match,
        Combinator::Any => condition_match || temperature_match,
    }
}

//! Last.fm client and mood-based song selection
//!
//! Each mood maps to a small list of descriptive tags. One tag is chosen
//! at random, the tag's top tracks are fetched, and one track is picked
//! at random from the first 10 ("top-10, then randomize" keeps results
//! popular but varied). An empty result retries once with the mood's
//! first tag, then falls back to a fixed song instead of failing.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::MusicServiceError;
use crate::models::{Mood, SongRecommendation};
use crate::services::SongProvider;

const USER_AGENT: &str = concat!("moodtune/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Result-limit parameter sent to the tag-search endpoint
const TAG_SEARCH_LIMIT: u32 = 50;

/// Tracks considered for random selection, in provider order
const PICK_POOL_SIZE: usize = 10;

/// Last.fm search tags per mood
pub fn tags_for(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &["happy", "upbeat", "cheerful", "feel good"],
        Mood::Sad => &["sad", "melancholy", "heartbreak", "emotional"],
        Mood::Calm => &["calm", "chill", "peaceful", "ambient"],
        Mood::Energetic => &["energetic", "upbeat", "party", "dance"],
        Mood::Romantic => &["romantic", "love songs", "ballad"],
        Mood::Angry => &["angry", "rage", "aggressive", "metal"],
        Mood::Anxious => &["anxious", "tense", "dark", "experimental"],
        Mood::Relaxed => &["relaxed", "chill", "lounge", "acoustic"],
    }
}

/// Recommendation of last resort when the tag search comes back empty twice
pub fn fallback_song() -> SongRecommendation {
    SongRecommendation {
        title: "Happy".to_string(),
        artist: "Pharrell Williams".to_string(),
        url: Some("https://www.last.fm/music/Pharrell+Williams/_/Happy".to_string()),
    }
}

/// One track from the tag-search response.
///
/// Every field is optional on the wire; missing title/artist degrade to
/// "Unknown Title"/"Unknown Artist" at selection time.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub name: Option<String>,
    pub artist: Option<TrackArtist>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TagTracksResponse {
    tracks: Option<TagTracks>,
}

#[derive(Debug, Deserialize)]
struct TagTracks {
    #[serde(default)]
    track: Vec<Track>,
}

/// Source of top tracks for a tag.
///
/// Implemented by [`LastFmClient`]; tests substitute scripted sources.
#[async_trait]
pub trait TagTrackSource: Send + Sync {
    async fn top_tracks(&self, tag: &str) -> Result<Vec<Track>, MusicServiceError>;
}

/// Last.fm API client
pub struct LastFmClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl LastFmClient {
    pub fn new(config: &Config) -> Result<Self, MusicServiceError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| MusicServiceError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: config.lastfm_api_key.clone(),
            base_url: config.lastfm_base_url.clone(),
        })
    }
}

#[async_trait]
impl TagTrackSource for LastFmClient {
    async fn top_tracks(&self, tag: &str) -> Result<Vec<Track>, MusicServiceError> {
        // Fail fast without touching the network when unconfigured
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(MusicServiceError::MissingApiKey)?;

        tracing::debug!(tag = %tag, "Querying Last.fm tag.gettoptracks");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("method", "tag.gettoptracks"),
                ("tag", tag),
                ("api_key", api_key),
                ("format", "json"),
                ("limit", &TAG_SEARCH_LIMIT.to_string()),
            ])
            .send()
            .await
            .map_err(|e| MusicServiceError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(MusicServiceError::Status(status.as_u16()));
        }

        let data: TagTracksResponse = response
            .json()
            .await
            .map_err(|e| MusicServiceError::MalformedResponse(e.to_string()))?;

        let tracks = data.tracks.map(|t| t.track).unwrap_or_default();

        tracing::debug!(tag = %tag, count = tracks.len(), "Retrieved tag tracks");

        Ok(tracks)
    }
}

/// Select one song for a mood from a tag-track source.
///
/// The randomness source is injected so tests can pin both the tag and
/// the track choice with a seeded generator.
pub async fn pick_for_mood<R: Rng>(
    source: &dyn TagTrackSource,
    mood: Mood,
    rng: &mut R,
) -> Result<SongRecommendation, MusicServiceError> {
    let tags = tags_for(mood);
    let selected_tag = tags[rng.gen_range(0..tags.len())];

    let mut tracks = source.top_tracks(selected_tag).await?;

    if tracks.is_empty() {
        // One retry with the mood's first tag, then the fixed fallback
        let alternative_tag = tags[0];
        tracing::info!(
            mood = %mood,
            tag = %selected_tag,
            alternative = %alternative_tag,
            "No tracks for selected tag, retrying with alternative"
        );
        tracks = source.top_tracks(alternative_tag).await?;

        if tracks.is_empty() {
            tracing::info!(mood = %mood, "No tracks for any tag, using fallback song");
            return Ok(fallback_song());
        }
    }

    tracks.truncate(PICK_POOL_SIZE);
    let track = tracks.swap_remove(rng.gen_range(0..tracks.len()));

    Ok(SongRecommendation {
        title: track.name.unwrap_or_else(|| "Unknown Title".to_string()),
        artist: track
            .artist
            .and_then(|a| a.name)
            .unwrap_or_else(|| "Unknown Artist".to_string()),
        url: track.url,
    })
}

/// [`SongProvider`] over any tag-track source, using entropy-seeded randomness
pub struct MoodMusicPicker {
    source: Arc<dyn TagTrackSource>,
}

impl MoodMusicPicker {
    pub fn new(source: Arc<dyn TagTrackSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl SongProvider for MoodMusicPicker {
    async fn recommend_song(&self, mood: Mood) -> Result<SongRecommendation, MusicServiceError> {
        // ThreadRng is !Send; an owned StdRng keeps the future Send
        let mut rng = StdRng::from_entropy();
        pick_for_mood(self.source.as_ref(), mood, &mut rng).await
    }
}

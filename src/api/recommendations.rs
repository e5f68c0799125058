//! Recommendation endpoint
//!
//! POST /api/v1/recommendations takes `{mood, city}` and returns the
//! composed recommendation. Upstream failures map to 503 with a
//! `detail` message naming the failing service; anything else is 500.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::RecommendationError;
use crate::models::{MoodRequest, RecommendationResult};
use crate::AppState;

/// Error response body, a single human-readable `detail` field
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// POST /api/v1/recommendations
///
/// An invalid mood string never reaches this handler; serde rejects it
/// at the extractor boundary with 422.
pub async fn get_recommendation(
    State(state): State<AppState>,
    Json(request): Json<MoodRequest>,
) -> Result<Json<RecommendationResult>, ApiError> {
    if request.city.trim().is_empty() {
        return Err(ApiError::EmptyCity);
    }

    let result = state.engine.recommend(request.mood, &request.city).await?;

    Ok(Json(result))
}

/// Handler-level error with its HTTP mapping
#[derive(Debug)]
pub enum ApiError {
    EmptyCity,
    Pipeline(RecommendationError),
}

impl From<RecommendationError> for ApiError {
    fn from(err: RecommendationError) -> Self {
        ApiError::Pipeline(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::EmptyCity => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "city must not be empty".to_string(),
            ),
            ApiError::Pipeline(err) => {
                let status = match &err {
                    RecommendationError::Weather(_) | RecommendationError::Music(_) => {
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                    RecommendationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                tracing::error!(error = %err, "Recommendation request failed");
                (status, err.to_string())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

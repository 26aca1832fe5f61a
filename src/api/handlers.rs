use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::types::*;
use crate::ranker::RecommendError;
use crate::server::AppState;

#[derive(Debug)]
pub enum ApiError {
    InvalidMood,
}

impl From<RecommendError> for ApiError {
    fn from(e: RecommendError) -> Self {
        match e {
            RecommendError::InvalidMood(_) => ApiError::InvalidMood,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidMood => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Invalid mood".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<Vec<RecommendedMovie>>, ApiError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(e) => {
            debug!("Rejected recommend body: {}", e);
            return Err(ApiError::InvalidMood);
        }
    };

    // A missing or non-string mood is treated like an unknown one.
    let mood = body.get("mood").and_then(|m| m.as_str()).unwrap_or("");

    let results = state.recommender.recommend(mood).map_err(|e| {
        debug!("{}", e);
        ApiError::from(e)
    })?;

    Ok(Json(results.into_iter().map(RecommendedMovie::from).collect()))
}

pub async fn list_moods(State(state): State<AppState>) -> Json<Vec<MoodInfo>> {
    Json(
        state
            .recommender
            .moods()
            .map(|(mood, keywords)| MoodInfo {
                mood: mood.as_str().to_string(),
                keywords: keywords.to_string(),
            })
            .collect(),
    )
}

pub async fn health(State(state): State<AppState>) -> Json<HealthInfo> {
    Json(HealthInfo {
        status: "ok".to_string(),
        movies: state.recommender.movie_count(),
        vocabulary: state.recommender.vocabulary_size(),
    })
}

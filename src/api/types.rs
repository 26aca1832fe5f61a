use serde::{Deserialize, Serialize};

use crate::ranker::Recommendation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedMovie {
    pub title: String,
    pub overview: String,
    pub genres: String,
}

impl From<Recommendation> for RecommendedMovie {
    fn from(r: Recommendation) -> Self {
        Self {
            title: r.title,
            overview: r.overview,
            genres: r.genres,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodInfo {
    pub mood: String,
    pub keywords: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub movies: usize,
    pub vocabulary: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

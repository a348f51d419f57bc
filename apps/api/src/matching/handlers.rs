//! Axum route handlers for the Recommendations API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranker::{has_signal, ScoredJob};
use crate::models::job::JobPosting;
use crate::models::{blank_as_none, lenient_skills};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default, deserialize_with = "lenient_skills")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub branch: Option<String>,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Uuid>,
    pub recommendations: Vec<ScoredJob>,
    /// False when the list is empty or every score is 0; clients show a "no matches" state.
    pub has_matches: bool,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/students/:id/recommendations
///
/// Fetches the student's profile and the recent-jobs candidate pool concurrently,
/// then ranks the pool against the profile.
pub async fn handle_student_recommendations(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let pool_size = state.config.candidate_pool_size;
    let limit = resolve_limit(query.limit, state.config.recommendation_limit)?.min(pool_size);

    let (profile, jobs) = tokio::try_join!(
        state.store.fetch_profile(student_id),
        state.store.fetch_recent_jobs(pool_size),
    )?;

    let profile =
        profile.ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))?;

    let recommendations =
        state
            .recommender
            .recommend(&profile.skills, profile.branch.as_deref(), &jobs, limit);

    debug!(
        %student_id,
        candidates = jobs.len(),
        returned = recommendations.len(),
        "Recommendations ranked"
    );

    Ok(Json(RecommendationResponse {
        student_id: Some(student_id),
        has_matches: has_signal(&recommendations),
        recommendations,
        scorer_backend: state.recommender.backend().to_string(),
    }))
}

/// POST /api/v1/recommendations/preview
///
/// Ranks caller-supplied jobs against caller-supplied skills. No store access.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let limit = resolve_limit(request.limit, state.config.recommendation_limit)?;

    let recommendations = state.recommender.recommend(
        &request.skills,
        request.branch.as_deref(),
        &request.jobs,
        limit,
    );

    Ok(Json(RecommendationResponse {
        student_id: None,
        has_matches: has_signal(&recommendations),
        recommendations,
        scorer_backend: state.recommender.backend().to_string(),
    }))
}

fn resolve_limit(requested: Option<usize>, default: usize) -> Result<usize, AppError> {
    match requested {
        None => Ok(default),
        Some(0) => Err(AppError::Validation("limit must be at least 1".to_string())),
        Some(n) => Ok(n),
    }
}

//! Axum route handlers for the Recommendation Engine.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::scoring::ScoreBreakdown;
use crate::engine::summary::{summarize, RecommendationSummary};
use crate::engine::{generate_recommendations, Eligibility, Recommendation};
use crate::errors::AppError;
use crate::models::student::StudentProfile;
use crate::models::university::University;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    /// Keep only recommendations in this band.
    pub eligibility: Option<Eligibility>,
    /// Maximum number of recommendations returned, applied after filtering.
    pub limit: Option<usize>,
}

/// Owned copy of a [`Recommendation`] for the response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    pub university: University,
    pub score: u32,
    pub eligibility: Eligibility,
    pub roi_score: Option<i64>,
    pub annual_cost: f64,
    pub breakdown: ScoreBreakdown,
}

impl From<&Recommendation<'_>> for RecommendationView {
    fn from(rec: &Recommendation<'_>) -> Self {
        Self {
            university: rec.university.clone(),
            score: rec.score,
            eligibility: rec.eligibility,
            roi_score: rec.roi_score,
            annual_cost: rec.university.annual_cost(),
            breakdown: rec.breakdown,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Number of universities scored, before filtering.
    pub total: usize,
    pub recommendations: Vec<RecommendationView>,
    /// Always computed over the full ranked list.
    pub summary: RecommendationSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Scores the whole catalog against the posted profile and returns it ranked.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    if query.limit == Some(0) {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }

    let ranked = generate_recommendations(&profile, &state.catalog)?;
    let summary = summarize(&ranked);

    let recommendations: Vec<RecommendationView> = ranked
        .iter()
        .filter(|rec| query.eligibility.map_or(true, |band| rec.eligibility == band))
        .take(query.limit.unwrap_or(usize::MAX))
        .map(RecommendationView::from)
        .collect();

    info!(
        "Ranked {} universities, returning {} (eligible: {})",
        ranked.len(),
        recommendations.len(),
        summary.eligibility_counts.eligible
    );

    Ok(Json(RecommendationsResponse {
        total: ranked.len(),
        recommendations,
        summary,
    }))
}

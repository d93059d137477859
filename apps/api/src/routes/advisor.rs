//! Axum route handlers for advisor commentary. Collaborator failures degrade
//! to the fallback message instead of an error response.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::advisor::prompts::{profile_analysis_prompt, student_summary, university_insight_prompt};
use crate::advisor::{advise, InsightPoint};
use crate::catalog;
use crate::engine::validation::validate_profile;
use crate::engine::{recommend, Eligibility};
use crate::errors::AppError;
use crate::models::student::StudentProfile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub university_id: String,
    pub score: u32,
    pub eligibility: Eligibility,
    pub insight: String,
    pub points: Vec<InsightPoint>,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
    pub points: Vec<InsightPoint>,
    pub available: bool,
}

/// POST /api/v1/recommendations/:university_id/insight
///
/// Scores one university for the posted profile and asks the advisor to
/// explain the match.
pub async fn handle_university_insight(
    State(state): State<AppState>,
    Path(university_id): Path<String>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<InsightResponse>, AppError> {
    validate_profile(&profile)?;

    let university = catalog::find(&state.catalog, &university_id)
        .ok_or_else(|| AppError::NotFound(format!("University {university_id} not found")))?;

    let rec = recommend(&profile, university);
    let prompt = university_insight_prompt(&student_summary(&profile), &rec);
    let (score, eligibility) = (rec.score, rec.eligibility);

    let reply = advise(state.explainer.as_ref(), &prompt).await;

    Ok(Json(InsightResponse {
        university_id,
        score,
        eligibility,
        insight: reply.text,
        points: reply.points,
        available: reply.available,
    }))
}

/// POST /api/v1/advisor/analysis
///
/// Free-form analysis of the whole profile.
pub async fn handle_profile_analysis(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let prompt = profile_analysis_prompt(&profile).map_err(|e| AppError::Internal(e.into()))?;

    let reply = advise(state.explainer.as_ref(), &prompt).await;

    Ok(Json(AnalysisResponse {
        analysis: reply.text,
        points: reply.points,
        available: reply.available,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::advisor::{Explainer, FALLBACK_MESSAGE};
    use crate::errors::AppError;
    use crate::routes::test_support::{post_json, send, test_app, unconfigured_app};

    /// Records prompts and answers with a fixed reply.
    #[derive(Default)]
    struct RecordingExplainer {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Explainer for RecordingExplainer {
        async fn explain(&self, prompt: &str) -> Result<String, AppError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("* Fit: Affordable and PR friendly\n* Tip: Apply early".to_string())
        }
    }

    fn profile() -> Value {
        json!({
            "gpa": 3.4,
            "degree": "B.Sc",
            "branch": "Mathematics",
            "preferred_countries": ["Germany"],
            "budget_min": 5000,
            "budget_max": 20000,
            "career_goal": "Data Science",
            "intake": "Spring 2027",
            "interested_in_pr": true
        })
    }

    #[tokio::test]
    async fn test_insight_includes_score_and_points() {
        let explainer = Arc::new(RecordingExplainer::default());
        let app = test_app(explainer.clone());

        let (status, body) = send(
            app,
            post_json("/api/v1/recommendations/tum/insight", &profile()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["universityId"], "tum");
        assert_eq!(body["score"], 100);
        assert_eq!(body["eligibility"], "eligible");
        assert_eq!(body["available"], true);
        assert_eq!(body["points"][1]["title"], "Tip");

        let prompts = explainer.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("University tum in Somewhere, Germany"));
        assert!(prompts[0].contains("Match score: 100/100 (eligible)"));
        assert!(prompts[0].contains("IELTS: N/A"));
    }

    #[tokio::test]
    async fn test_insight_for_unknown_university_is_404() {
        let (status, body) = send(
            unconfigured_app(),
            post_json("/api/v1/recommendations/atlantis/insight", &profile()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_insight_falls_back_without_advisor() {
        let (status, body) = send(
            unconfigured_app(),
            post_json("/api/v1/recommendations/cmu/insight", &profile()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], false);
        assert_eq!(body["insight"], FALLBACK_MESSAGE);
        assert_eq!(body["universityId"], "cmu");
    }

    #[tokio::test]
    async fn test_analysis_sends_profile_json() {
        let explainer = Arc::new(RecordingExplainer::default());
        let app = test_app(explainer.clone());

        let (status, body) =
            send(app, post_json("/api/v1/advisor/analysis", &profile())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], true);
        assert_eq!(body["points"][0]["title"], "Fit");

        let prompts = explainer.prompts.lock().unwrap();
        assert!(prompts[0].contains("\"career_goal\": \"Data Science\""));
    }

    #[tokio::test]
    async fn test_analysis_falls_back_without_advisor() {
        let (status, body) = send(
            unconfigured_app(),
            post_json("/api/v1/advisor/analysis", &profile()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], false);
        assert_eq!(body["analysis"], FALLBACK_MESSAGE);
    }
}

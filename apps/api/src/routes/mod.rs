pub mod advisor;
pub mod health;
pub mod recommendations;
pub mod universities;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route(
            "/api/v1/universities",
            get(universities::handle_list_universities),
        )
        .route(
            "/api/v1/universities/:id",
            get(universities::handle_get_university),
        )
        // Recommendation engine
        .route(
            "/api/v1/recommendations",
            post(recommendations::handle_recommendations),
        )
        .route(
            "/api/v1/recommendations/:university_id/insight",
            post(advisor::handle_university_insight),
        )
        // Advisor
        .route(
            "/api/v1/advisor/analysis",
            post(advisor::handle_profile_analysis),
        )
        .with_state(state)
}

use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog;
use crate::errors::AppError;
use crate::models::university::University;
use crate::state::AppState;

/// GET /api/v1/universities
///
/// The full catalog in load order.
pub async fn handle_list_universities(State(state): State<AppState>) -> Json<Vec<University>> {
    Json(state.catalog.as_ref().clone())
}

/// GET /api/v1/universities/:id
pub async fn handle_get_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<University>, AppError> {
    catalog::find(&state.catalog, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("University {id} not found")))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{get, send, unconfigured_app};

    #[tokio::test]
    async fn test_list_preserves_catalog_order() {
        let (status, body) = send(unconfigured_app(), get("/api/v1/universities")).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["cmu", "manchester", "tum"]);
    }

    #[tokio::test]
    async fn test_get_one_uses_catalog_key_names() {
        let (status, body) = send(unconfigured_app(), get("/api/v1/universities/tum")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["country"], "Germany");
        assert_eq!(body["tuitionPerYear"], 3000.0);
        assert_eq!(body["prFriendly"], true);
    }

    #[tokio::test]
    async fn test_unknown_id_is_404() {
        let (status, body) = send(unconfigured_app(), get("/api/v1/universities/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

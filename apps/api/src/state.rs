use std::sync::Arc;

use crate::advisor::Explainer;
use crate::config::Config;
use crate::models::university::University;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<Vec<University>>,
    /// Pluggable prose collaborator. `UnconfiguredExplainer` when no API key is set.
    pub explainer: Arc<dyn Explainer>,
    pub config: Config,
}

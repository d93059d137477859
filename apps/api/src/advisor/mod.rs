//! Advisor — free-text commentary on a profile or a single recommendation.
//!
//! The prose collaborator is opaque: it gets a prompt string and returns a
//! string or fails. Nothing here feeds back into scoring.
//!
//! `AppState` holds an `Arc<dyn Explainer>`, picked at startup from config.

pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::ADVISOR_SYSTEM;
use crate::llm_client::LlmClient;

/// Returned in place of commentary when the collaborator fails.
pub const FALLBACK_MESSAGE: &str = "AI explanation is currently unavailable. \
    Recommendations are still based on your profile data.";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Explainer: Send + Sync {
    async fn explain(&self, prompt: &str) -> Result<String, AppError>;
}

/// Explainer backed by the shared LLM client.
pub struct LlmExplainer(pub LlmClient);

#[async_trait]
impl Explainer for LlmExplainer {
    async fn explain(&self, prompt: &str) -> Result<String, AppError> {
        Ok(self.0.call_text(prompt, ADVISOR_SYSTEM).await?)
    }
}

/// Used when no API key is configured; every call fails.
pub struct UnconfiguredExplainer;

#[async_trait]
impl Explainer for UnconfiguredExplainer {
    async fn explain(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::Llm("advisor is not configured".to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Replies
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InsightPoint {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdvisorReply {
    pub text: String,
    pub points: Vec<InsightPoint>,
    /// `false` when `text` is the fallback message.
    pub available: bool,
}

/// Asks the explainer and degrades to [`FALLBACK_MESSAGE`] on any failure.
pub async fn advise(explainer: &dyn Explainer, prompt: &str) -> AdvisorReply {
    match explainer.explain(prompt).await {
        Ok(text) => AdvisorReply {
            points: parse_insight_points(&text),
            text,
            available: true,
        },
        Err(e) => {
            warn!("Advisor unavailable, using fallback: {e}");
            AdvisorReply {
                text: FALLBACK_MESSAGE.to_string(),
                points: vec![],
                available: false,
            }
        }
    }
}

/// Extracts `* Title: detail` lines. Lines without a colon keep the whole
/// line as the title. Other lines are ignored.
pub fn parse_insight_points(text: &str) -> Vec<InsightPoint> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('*'))
        .map(|line| line.trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((title, detail)) => InsightPoint {
                title: title.trim().to_string(),
                detail: detail.trim().to_string(),
            },
            None => InsightPoint {
                title: line.to_string(),
                detail: String::new(),
            },
        })
        .collect()
}

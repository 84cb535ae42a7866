//! Axum route handlers for the Skills and Dictionary APIs.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::ranking::{Profile, ScoredCandidate};
use crate::models::posting::{resolve_skills, JobPosting, ResolvedSkills};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileName {
    #[default]
    Quick,
    Strict,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub profile: ProfileName,
    /// Overrides the named profile's threshold.
    pub min_score: Option<u32>,
    /// Overrides the named profile's result cap.
    pub max_count: Option<usize>,
    #[serde(default)]
    pub include_scores: bool,
}

impl ExtractRequest {
    fn resolve_profile(&self) -> Result<Profile, AppError> {
        let base = match self.profile {
            ProfileName::Quick => Profile::QUICK,
            ProfileName::Strict => Profile::STRICT,
        };
        let max_count = self.max_count.unwrap_or(base.max_count);
        if max_count == 0 {
            return Err(AppError::Validation(
                "max_count must be greater than zero".to_string(),
            ));
        }
        Ok(Profile::custom(
            self.min_score.unwrap_or(base.min_score),
            max_count,
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scored: Option<Vec<ScoredCandidate>>,
}

#[derive(Debug, Serialize)]
pub struct DictionaryResponse {
    pub labels: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ExtendDictionaryRequest {
    pub labels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtendDictionaryResponse {
    pub added: usize,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/extract
///
/// Ranks skills found in a description + requirement lines. Empty text yields an
/// empty list, never an error.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let profile = request.resolve_profile()?;

    let scored =
        state
            .extractor
            .extract_scored(&request.description, &request.requirements, profile);
    let skills = scored.iter().map(|c| c.label.clone()).collect();

    Ok(Json(ExtractResponse {
        skills,
        profile,
        scored: request.include_scores.then_some(scored),
    }))
}

/// POST /api/v1/skills/resolve
///
/// Structured skills when the posting has them, quick extraction otherwise.
pub async fn handle_resolve(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<ResolvedSkills>, AppError> {
    Ok(Json(resolve_skills(&posting, &state.extractor)))
}

/// GET /api/v1/dictionary
pub async fn handle_list_dictionary(State(state): State<AppState>) -> Json<DictionaryResponse> {
    let labels = state.extractor.dictionary().all_labels();
    let total = labels.len();
    Json(DictionaryResponse { labels, total })
}

/// POST /api/v1/dictionary
///
/// Adds labels to the live vocabulary; already-known labels are ignored.
pub async fn handle_extend_dictionary(
    State(state): State<AppState>,
    Json(request): Json<ExtendDictionaryRequest>,
) -> Result<Json<ExtendDictionaryResponse>, AppError> {
    if request.labels.iter().all(|l| l.trim().is_empty()) {
        return Err(AppError::Validation("labels cannot be empty".to_string()));
    }

    let dictionary = state.extractor.dictionary();
    let added = dictionary.add_labels(&request.labels);
    info!("Dictionary extension request: {} submitted, {added} new", request.labels.len());

    Ok(Json(ExtendDictionaryResponse {
        added,
        total: dictionary.len(),
    }))
}

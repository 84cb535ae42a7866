use std::sync::Arc;

use crate::config::Config;
use crate::extraction::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Extraction engine. Its dictionary is the one `/api/v1/dictionary` grows.
    pub extractor: Arc<SkillExtractor>,
    pub config: Config,
}

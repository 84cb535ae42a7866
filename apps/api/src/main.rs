use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobskills::config::Config;
use jobskills::extraction::dictionary::{DictionarySource, SkillDictionary};
use jobskills::extraction::SkillExtractor;
use jobskills::routes::build_router;
use jobskills::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobskills API v{}", env!("CARGO_PKG_VERSION"));

    // Shared dictionary: built-in vocabulary plus the optional operator file
    let dictionary = SkillDictionary::shared();
    if let Some(path) = &config.dictionary_path {
        let source = DictionarySource::load(path)
            .with_context(|| format!("Failed to load skill dictionary {}", path.display()))?;
        let added = dictionary.merge_source(source)?;
        info!("Merged {added} label(s) from {}", path.display());
    }
    info!(
        "Skill dictionary ready: {} labels, {} patterns",
        dictionary.len(),
        dictionary.snapshot().patterns().len()
    );

    let state = AppState {
        extractor: Arc::new(SkillExtractor::new(dictionary)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

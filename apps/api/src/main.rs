use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillgap::config::Config;
use skillgap::courses::{CourseRecommender, DisabledRecommender, YouTubeRecommender};
use skillgap::matching::vocabulary::SkillVocabulary;
use skillgap::routes::build_router;
use skillgap::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log level is known
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillGap API v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary: built-in list unless SKILL_VOCABULARY_PATH points elsewhere
    let vocabulary = SkillVocabulary::load(config.skill_vocabulary_path.as_deref())
        .context("Failed to load skill vocabulary")?;
    info!("Skill vocabulary ready ({} terms)", vocabulary.len());

    let recommender = build_recommender(&config)?;

    let state = AppState {
        config: config.clone(),
        vocabulary: Arc::new(vocabulary),
        recommender,
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

/// YouTube lookups when an API key is configured, a disabled backend otherwise.
fn build_recommender(config: &Config) -> Result<Arc<dyn CourseRecommender>> {
    let Some(api_key) = config.youtube_api_key.clone() else {
        warn!("YOUTUBE_API_KEY not set; course recommendations are disabled");
        return Ok(Arc::new(DisabledRecommender));
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.course_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    info!("Course lookups via {}", config.youtube_api_url);
    Ok(Arc::new(YouTubeRecommender::new(
        client,
        config.youtube_api_url.clone(),
        api_key,
    )))
}

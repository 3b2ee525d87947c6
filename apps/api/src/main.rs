mod auth;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::store::{CredentialStore, MongoCredentialStore};
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Studymap API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize MongoDB. An unreachable server is logged inside connect()
    // and does not stop the process; later requests fail individually.
    let db = db::connect(&config.mongodb_uri, &config.mongodb_database).await?;
    let store: Arc<dyn CredentialStore> = Arc::new(MongoCredentialStore::new(&db));

    // Initialize the Gemini client when a key is configured.
    let llm = match &config.gemini_api_key {
        Some(key) => {
            info!("Gemini client initialized (model: {})", llm_client::MODEL);
            Some(GeminiClient::new(key.clone()))
        }
        None => {
            warn!("GEMINI_API_KEY not set; /generate-roadmap is disabled");
            None
        }
    };

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = AppState {
        store,
        llm,
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

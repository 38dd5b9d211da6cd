//! Server state and router assembly.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::engine::{EngineCache, EngineFactory, RemoteEngineFactory};
use crate::server::config::AppConfig;
use crate::server::routes;

/// Server state shared across handlers
pub struct AppState {
    /// Per-language engine handles
    pub engines: EngineCache,
    /// Directory holding generated WAV files
    pub output_dir: PathBuf,
    /// Whether the sidecar answered the startup probe
    pub engine_available: bool,
    /// Start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    pub fn new(factory: Box<dyn EngineFactory>, output_dir: PathBuf, engine_available: bool) -> Self {
        Self {
            engines: EngineCache::new(factory),
            output_dir,
            engine_available,
            start_time: Instant::now(),
        }
    }

    /// Server uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::index::index))
        .route("/generate", post(routes::generate::generate))
        .route("/download/:file_id", get(routes::download::download))
        .route("/status", get(routes::status::status))
        .route("/health", get(routes::health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// The web surface
pub struct TtsServer {
    config: AppConfig,
}

impl TtsServer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the server until the process exits
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let factory =
            RemoteEngineFactory::new(&self.config.engine.base_url, self.config.engine.timeout())?;
        let available = factory.is_available().await;
        if available {
            info!("Kokoro sidecar reachable at {}", self.config.engine.base_url);
        } else {
            warn!(
                "Kokoro sidecar not reachable at {}; /generate will report it unavailable",
                self.config.engine.base_url
            );
        }

        let state = Arc::new(AppState::new(
            Box::new(factory),
            self.config.output_dir.clone(),
            available,
        ));
        let router = create_router(state);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!("Starting Kokoro Studio server on {}", addr);
        info!("Output folder: {:?}", self.config.output_dir);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

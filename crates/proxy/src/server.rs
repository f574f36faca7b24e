use crate::backend::BackendClient;
use alp_common::SystemConfig;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

pub struct ProxyServer {
    config: SystemConfig,
    state: AppState,
}

impl ProxyServer {
    pub fn new(config: SystemConfig) -> Result<Self> {
        let backend = BackendClient::new(&config.backend)
            .context("Failed to initialize backend client")?;

        Ok(Self {
            config,
            state: AppState {
                backend: Arc::new(backend),
            },
        })
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/generate", post(crate::routes::generate::generate))
            .route("/stats", get(crate::routes::stats::stats))
            .route("/health", get(crate::routes::health::health))
            .layer(axum::middleware::from_fn(
                crate::middleware::logging::logging_middleware,
            ))
            .layer(crate::middleware::logging::get_tracing_layer())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    pub async fn run(self) -> Result<()> {
        let addr = self.config.listen_addr();
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(addr = %addr, backend = %self.config.backend.url, "ALP proxy listening");

        axum::serve(listener, router)
            .await
            .context("Proxy server terminated")?;

        Ok(())
    }
}

use crate::config::ExamConfig;
use crate::handlers;
use crate::services::providers::openai::{OpenAiConfig, OpenAiProvider};
use crate::services::providers::ChatProvider;
use crate::services::{DocumentStore, LocalDocumentStore};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ExamConfig,
    pub store: Arc<dyn DocumentStore>,
    pub provider: Arc<dyn ChatProvider>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the OpenAI provider from configuration.
    pub async fn build(config: ExamConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiProvider::new(OpenAiConfig {
            api_key: config.generation.api_key.clone(),
            model: config.generation.model.clone(),
            base_url: config.generation.base_url.clone(),
        }));

        tracing::info!(model = %config.generation.model, "Initialized OpenAI chat provider");

        Self::build_with_provider(config, provider).await
    }

    /// Build with an injected chat provider (test seam).
    pub async fn build_with_provider(
        config: ExamConfig,
        provider: Arc<dyn ChatProvider>,
    ) -> Result<Self, AppError> {
        let store: Arc<dyn DocumentStore> = Arc::new(
            LocalDocumentStore::new(&config.storage.local_path)
                .await
                .map_err(|e| {
                    tracing::error!(
                        "Failed to initialize document store at {}: {}",
                        config.storage.local_path,
                        e
                    );
                    AppError::from(e)
                })?,
        );

        let state = AppState {
            config: config.clone(),
            store,
            provider,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/upload", post(handlers::upload_document))
            .route("/questions", post(handlers::generate_questions))
            .route("/answer", post(handlers::generate_answers))
            .route("/summarize", post(handlers::summarize))
            .layer(TraceLayer::new_for_http())
            // Development default: the reference frontend runs on another
            // origin.
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

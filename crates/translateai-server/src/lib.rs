#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod access;
mod api;
mod error;
mod extract;
mod health;
mod http_client;
mod page;
mod view;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use secrecy::SecretString;
use stt::WhisperProvider;
use tower_http::trace::TraceLayer;
use translateai_blob::VercelBlobStore;
use translateai_config::Config;
use translateai_pipeline::{Adapters, SubmissionController};
use translation::OpenAiTranslator;
use tts::OpenAiTtsProvider;

pub use access::{AccessGate, AuthResult, Credentials};
pub use error::ServerError;
pub use view::{FormState, PageState, SelectedFile};

/// Shared by every handler; immutable after startup
#[derive(Clone)]
pub(crate) struct AppState {
    controller: Arc<SubmissionController>,
    gate: Arc<AccessGate>,
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the blob store client cannot
    /// be built
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let adapters = build_adapters(&config)?;

        let state = AppState {
            controller: Arc::new(SubmissionController::new(adapters)),
            gate: Arc::new(AccessGate::new(config.access.as_ref())),
        };

        let mut app = Router::new()
            .route("/", get(page::index).post(page::login))
            .route("/upload", post(page::upload))
            .route("/api/translate", post(api::translate))
            .route("/api/auth", post(api::authenticate))
            .with_state(state);

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        app = app
            .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
            .layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

fn build_adapters(config: &Config) -> anyhow::Result<Adapters> {
    let client = http_client::http_client()?;
    let provider_url = config.provider.base_url.as_ref().map(ToString::to_string);
    let api_key: SecretString = config.provider.api_key.clone();

    let blob = VercelBlobStore::new(
        client.clone(),
        config.blob.token.clone(),
        config.blob.base_url.clone(),
        config.blob.api_version.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize blob store: {e}"))?;

    tracing::debug!(provider_url = provider_url.as_deref().unwrap_or("default"), "adapters initialized");

    Ok(Adapters {
        blob: Arc::new(blob),
        stt: Arc::new(WhisperProvider::new(client.clone(), api_key.clone(), provider_url.clone())),
        translator: Arc::new(OpenAiTranslator::new(client.clone(), api_key.clone(), provider_url.clone())),
        tts: Arc::new(OpenAiTtsProvider::new(client, api_key, provider_url)),
    })
}

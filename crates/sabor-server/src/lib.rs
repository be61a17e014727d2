//! Sabor Express HTTP/JSON API.
//!
//! Serves the restaurant catalog over REST. The catalog is loaded from local
//! files when the server starts, held in an explicitly owned
//! [`CatalogStore`] that every handler receives through [`AppState`], and
//! cleared when the server shuts down.

pub mod config;
pub mod error;
pub mod json;
pub mod routes;

pub use config::{Args, ServerArgs, ServerConfig};
pub use error::AppError;

use std::sync::Arc;

use axum::Router;
use sabor_core::{load_catalog, CatalogStore};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory catalog.
    pub store: Arc<CatalogStore>,
    /// Server configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: CatalogStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// Load the catalog from the configured data paths.
    pub fn load(config: ServerConfig) -> Self {
        let catalog = load_catalog(&config.data);
        Self::new(CatalogStore::with_catalog(catalog), config)
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::restaurants::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("sabor_server={level},sabor_core={level},sabor_cli={level},tower_http=info")
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load the catalog, serve until Ctrl+C or SIGTERM, then clear the catalog.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    info!(
        listen = %config.listen_addr,
        menu_dir = %config.data.menu_dir.display(),
        metadata = %config.data.metadata_file.display(),
        "Starting Sabor Express API"
    );

    let state = AppState::load(config.clone());
    let store = state.store.clone();
    let app = create_router(state);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!("API listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(count = store.len(), "Shutting down, clearing catalog");
    store.clear();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal");
            }
            Err(e) => {
                tracing::warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

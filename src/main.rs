// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use crate::application::dashboard_service::DashboardService;
use crate::application::profile_service::ProfileService;
use crate::application::view_state_store::{KeyValueStore, ViewStateStore};
use crate::infrastructure::config::{StoreBackend, load_app_config};
use crate::infrastructure::file_store::FileStore;
use crate::infrastructure::memory_store::MemoryStore;
use crate::infrastructure::placeholder_api::PlaceholderApiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::router::router;
use crate::presentation::views::Views;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Remote API client and view state store (infrastructure layer)
    let source = Arc::new(PlaceholderApiClient::new(&config.api.base_url));
    let kv_store: Arc<dyn KeyValueStore> = match config.store.backend {
        StoreBackend::File => Arc::new(FileStore::open(&config.store.path)),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    // Create services (application layer)
    let dashboard_service = DashboardService::new(source.clone(), ViewStateStore::new(kv_store));
    let profile_service = ProfileService::new(source);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        profile_service,
        views: Views::new()?,
        ui: config.ui,
    });

    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        "Serving comments dashboard on http://{} (api: {})",
        addr,
        config.api.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}

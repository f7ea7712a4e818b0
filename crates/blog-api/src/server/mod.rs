//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use blog_common::{AppConfig, AppError, StorageBackend};
use blog_core::traits::Store;
use blog_db::{apply_schema, create_pool, MemoryStore, PgStore};
use blog_service::ServiceContext;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::openapi::swagger_ui;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(swagger_ui());
    let router = apply_middleware(
        router,
        &config.cors,
        config.app.env.is_production(),
        config.request_timeout(),
    );
    router.with_state(state)
}

/// Open the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let store: Arc<dyn Store> = match config.storage {
        StorageBackend::Postgres => {
            info!("Connecting to PostgreSQL...");
            let db_config = blog_db::DatabaseConfig {
                url: config.database.url.clone(),
                max_connections: config.database.max_connections,
                min_connections: config.database.min_connections,
                acquire_timeout: std::time::Duration::from_secs(
                    config.database.acquire_timeout_secs,
                ),
                ..Default::default()
            };
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            apply_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");
            Arc::new(PgStore::new(pool))
        }
        StorageBackend::Memory => {
            warn!("Using the in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(AppState::new(ServiceContext::new(store), config))
}

/// Run the HTTP server until Ctrl-C or SIGTERM
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener.local_addr().map_err(AppError::internal)?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::internal)?;

    info!("Server stopped");
    Ok(())
}

/// Bind the listener
pub async fn bind(addr: &str) -> Result<TcpListener, AppError> {
    TcpListener::bind(addr).await.map_err(|e| AppError::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    })
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    let listener = bind(&addr).await?;
    run_server(app, listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

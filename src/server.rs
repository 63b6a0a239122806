//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, explicit wiring of repository and service, and the
//! Axum server lifecycle including graceful shutdown.

use crate::application::services::StudentService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::StudentRepository;
use crate::infrastructure::persistence::{InMemoryStudentRepository, PgStudentRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (postgres backend only)
/// - Student repository and service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the repository for the configured backend and wires it into the
/// service and handler state.
async fn build_state(config: &Config) -> Result<AppState> {
    let (repository, db): (Arc<dyn StudentRepository>, Option<Arc<PgPool>>) =
        match config.storage_backend {
            StorageBackend::Postgres => {
                let pool = Arc::new(connect_pool(config).await?);
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(pool.as_ref())
                    .await
                    .context("Failed to run migrations")?;
                tracing::info!("Migrations applied");

                let repository: Arc<dyn StudentRepository> =
                    Arc::new(PgStudentRepository::new(pool.clone()));
                (repository, Some(pool))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                let repository: Arc<dyn StudentRepository> =
                    Arc::new(InMemoryStudentRepository::new());
                (repository, None)
            }
        };

    let student_service = Arc::new(StudentService::new(repository));

    Ok(AppState::new(student_service, db))
}

/// Opens the Postgres pool using the configured limits.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, draining connections");
}

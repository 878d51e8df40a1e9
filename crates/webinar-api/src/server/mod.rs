//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};
use webinar_common::{AppConfig, AppError, JwtService, StorageBackend};
use webinar_core::traits::WebinarRepository;
use webinar_db::{create_pool, run_migrations, InMemoryWebinarRepository, PgPool, PgWebinarRepository};
use webinar_service::ServiceContextBuilder;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, &state.config().http);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// The webinar repository is chosen here from `STORAGE_BACKEND`.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let (pool, webinar_repo) = match config.storage {
        StorageBackend::Postgres => {
            let pool = connect_postgres(&config).await?;
            let repo: Arc<dyn WebinarRepository> = Arc::new(PgWebinarRepository::new(pool.clone()));
            (Some(pool), repo)
        }
        StorageBackend::Memory => {
            if config.database.is_some() {
                warn!("DATABASE_URL is set but ignored by the in-memory storage backend");
            }
            info!("Using in-memory webinar storage");
            let repo: Arc<dyn WebinarRepository> = Arc::new(InMemoryWebinarRepository::new());
            (None, repo)
        }
    };

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Build service context
    let mut builder = ServiceContextBuilder::new()
        .webinar_repo(webinar_repo)
        .jwt_service(jwt_service);
    if let Some(pool) = pool {
        builder = builder.pool(pool);
    }
    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

async fn connect_postgres(config: &AppConfig) -> Result<PgPool, AppError> {
    let database = config
        .database
        .as_ref()
        .ok_or_else(|| AppError::Config("DATABASE_URL is required for postgres storage".to_string()))?;

    info!("Connecting to PostgreSQL...");
    let db_config = webinar_db::DatabaseConfig {
        url: database.url.clone(),
        max_connections: database.max_connections,
        min_connections: database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations applied");
    }

    Ok(pool)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {}", e)))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}

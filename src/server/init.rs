/**
 * Application Construction
 *
 * Builds the request-handling pipeline from a `ServerConfig`: connects
 * the user directory, wires the services and assembles the router.
 *
 * # Resilience
 *
 * A missing or unreachable database does not prevent startup: the server
 * falls back to the in-memory directory with a logged warning, so local
 * development works without Postgres. Data written there does not survive
 * a restart.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::auth::{AuthService, TokenIssuer};
use crate::middleware::rate_limit::build_limiter;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;
use crate::users::{InMemoryUserDirectory, PgUserDirectory, ProfileService, UserDirectory};

/// Create the Axum application from configuration
pub async fn create_app(config: &ServerConfig) -> Router {
    let directory = load_directory(config).await;
    app_with_directory(config, directory)
}

/// Create the application over an explicit directory
///
/// Separated from [`create_app`] so tests can drive the full router and
/// middleware stack over the in-memory store.
pub fn app_with_directory(config: &ServerConfig, directory: Arc<dyn UserDirectory>) -> Router {
    let tokens = Arc::new(TokenIssuer::new(&config.jwt_secret, config.token_ttl));
    let auth = AuthService::new(directory.clone(), tokens.clone(), config.bcrypt_cost);
    let profiles = ProfileService::new(directory.clone(), config.bcrypt_cost);
    let rate_limiter = Arc::new(build_limiter(&config.rate_limit));

    let state = AppState {
        directory,
        tokens,
        auth,
        profiles,
        rate_limiter,
    };

    create_router(state, config)
}

/// Connect the configured user directory
async fn load_directory(config: &ServerConfig) -> Arc<dyn UserDirectory> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, using the in-memory user directory");
        return Arc::new(InMemoryUserDirectory::new());
    };

    tracing::info!("Connecting to database...");
    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {e}");
            tracing::warn!("Falling back to the in-memory user directory");
            return Arc::new(InMemoryUserDirectory::new());
        }
    };

    tracing::info!("Running database migrations...");
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        // Migrations may already have been applied by another instance
        tracing::error!("Failed to run database migrations: {e}");
    }

    tracing::info!("Database connection pool created successfully");
    Arc::new(PgUserDirectory::new(pool))
}

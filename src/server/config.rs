/**
 * Server Configuration
 *
 * All runtime knobs in one struct, loaded from environment variables with
 * development-friendly defaults. The application is constructed from this
 * struct explicitly; there are no module-level singletons.
 *
 * # Environment Variables
 *
 * - `SERVER_PORT` - listen port (default 3000)
 * - `DATABASE_URL` - Postgres connection string; absent → in-memory store
 * - `JWT_SECRET` - token signing secret
 * - `TOKEN_TTL_SECS` - token lifetime (default 86400, i.e. 24 hours)
 * - `BCRYPT_COST` - password hashing work factor (default 10)
 * - `ALLOWED_ORIGINS` - comma-separated CORS origins; absent → permissive
 * - `RATE_LIMIT_MAX` / `RATE_LIMIT_WINDOW_SECS` - auth route budget
 *   (default 100 requests per 900 seconds)
 */

use std::time::Duration;

use crate::auth::password::DEFAULT_COST;

/// Default token lifetime: 24 hours
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Rate limit parameters for the public auth routes
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    pub max_requests: u32,
    /// Window length in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window_secs: 15 * 60,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: None,
            jwt_secret: "change-me-in-production".to_string(),
            token_ttl: DEFAULT_TOKEN_TTL,
            bcrypt_cost: DEFAULT_COST,
            allowed_origins: Vec::new(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Unparsable values fall back to their defaults with a logged
    /// warning; a missing `JWT_SECRET` is tolerated but loudly flagged.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using an insecure default");
            defaults.jwt_secret.clone()
        });

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            port: env_parse("SERVER_PORT", defaults.port),
            database_url: std::env::var("DATABASE_URL").ok(),
            jwt_secret,
            token_ttl: Duration::from_secs(env_parse(
                "TOKEN_TTL_SECS",
                defaults.token_ttl.as_secs(),
            )),
            bcrypt_cost: env_parse("BCRYPT_COST", defaults.bcrypt_cost),
            allowed_origins,
            rate_limit: RateLimitConfig {
                max_requests: env_parse("RATE_LIMIT_MAX", defaults.rate_limit.max_requests),
                window_secs: env_parse(
                    "RATE_LIMIT_WINDOW_SECS",
                    defaults.rate_limit.window_secs,
                ),
            },
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {name} value {value:?}, using default");
            default
        }),
        Err(_) => default,
    }
}

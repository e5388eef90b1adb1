/**
 * Application State
 *
 * The central state container shared across all request handlers. Cheap
 * to clone: services and shared resources are behind `Arc`.
 */

use std::sync::Arc;

use crate::auth::{AuthService, TokenIssuer};
use crate::middleware::rate_limit::AuthRateLimiter;
use crate::users::{ProfileService, UserDirectory};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The user record store
    pub directory: Arc<dyn UserDirectory>,
    /// Token issuer/verifier used by the auth gate and services
    pub tokens: Arc<TokenIssuer>,
    /// Registration and login orchestration
    pub auth: AuthService,
    /// Authenticated profile operations
    pub profiles: ProfileService,
    /// Limiter for the public auth routes
    pub rate_limiter: Arc<AuthRateLimiter>,
}

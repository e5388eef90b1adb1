//! Middleware Module
//!
//! Request-scoped middleware: the authentication gate protecting the user
//! routes and the rate limiter in front of the public auth routes.

/// Authentication gate
pub mod auth;

/// Rate limiting
pub mod rate_limit;

pub use auth::{require_auth, CurrentUser};
pub use rate_limit::limit_requests;

//! Userdock Backend
//!
//! A small HTTP API backend providing user registration, authentication,
//! and profile management on top of Axum.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, JWT tokens, registration and login
//! - **`users`** - User directory (Postgres and in-memory) and profile service
//! - **`middleware`** - Authentication gate and rate limiting
//! - **`error`** - API error taxonomy
//! - **`validate`** - Input validation helpers
//!
//! # Authentication Flow
//!
//! 1. **Register**: client provides name, email and password → user created → JWT token returned
//! 2. **Login**: client provides email and password → credentials verified → JWT token returned
//! 3. **Protected routes**: client sends `Authorization: Bearer <token>` →
//!    the auth gate verifies the token, resolves the user and attaches it
//!    to the request before any handler runs
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//!   in any response
//! - JWT tokens are stateless, signed with HS256 and time-bounded by a
//!   configurable TTL (default 24 hours)
//! - Tokens are not revocable; they die at expiry

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Password hashing, tokens and the authentication service
pub mod auth;

/// User directory and profile service
pub mod users;

/// Request processing middleware
pub mod middleware;

/// API error types
pub mod error;

/// Input validation helpers
pub mod validate;

// Re-export commonly used types
pub use error::ApiError;
pub use server::init::create_app;
pub use server::config::ServerConfig;

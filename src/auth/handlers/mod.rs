//! Authentication Handlers Module
//!
//! HTTP handlers for the unauthenticated endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

pub use types::{AuthResponse, LoginRequest, RegisterRequest};

pub use login::login;
pub use register::register;

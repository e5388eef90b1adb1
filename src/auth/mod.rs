//! Authentication Module
//!
//! This module handles credential hashing, token issuance/verification and
//! the registration/login orchestration.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── password.rs     - bcrypt hashing and verification
//! ├── tokens.rs       - JWT issuance and validation
//! ├── service.rs      - register/login orchestration
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```

/// bcrypt password hashing and verification
pub mod password;

/// JWT token issuance and validation
pub mod tokens;

/// Registration and login orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use service::AuthService;
pub use tokens::TokenIssuer;

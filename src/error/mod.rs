//! API Error Types
//!
//! This module defines the closed error taxonomy used across the backend
//! and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs          - Module exports
//! ├── types.rs        - ApiError enum and status mapping
//! └── conversion.rs   - IntoResponse implementation
//! ```
//!
//! # Propagation Policy
//!
//! Domain errors (duplicate email, invalid credentials, bad or expired
//! tokens, unknown users) carry their own HTTP status and travel unchanged
//! to the boundary. Anything unexpected is wrapped into a generic internal
//! error carrying a safe message; the original failure is only ever logged
//! server-side.

/// Error enum and status mapping
pub mod types;

/// HTTP response conversion
pub mod conversion;

pub use types::ApiError;

//! Routes Module
//!
//! HTTP route configuration and router assembly.

/// Route registration for the API endpoints
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;

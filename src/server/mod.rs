//! Server Module
//!
//! Configuration, shared application state and initialization.

/// Environment-driven configuration
pub mod config;

/// Shared application state
pub mod state;

/// Application construction
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;

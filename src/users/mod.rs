//! Users Module
//!
//! User records, the directory abstraction over their storage, and the
//! profile service for authenticated operations.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs          - Module exports
//! ├── directory.rs    - UserRecord, Identity, UserDirectory trait
//! ├── postgres.rs     - Postgres-backed directory
//! ├── memory.rs       - In-memory directory (tests, no-database fallback)
//! ├── service.rs      - ProfileService (fetch, update, password change)
//! └── handlers.rs     - HTTP handlers for protected routes
//! ```

/// Records and the directory abstraction
pub mod directory;

/// Postgres-backed directory
pub mod postgres;

/// In-memory directory
pub mod memory;

/// Profile service
pub mod service;

/// HTTP handlers for protected routes
pub mod handlers;

pub use directory::{Identity, UserDirectory, UserRecord};
pub use memory::InMemoryUserDirectory;
pub use postgres::PgUserDirectory;
pub use service::ProfileService;

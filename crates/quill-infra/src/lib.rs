//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! PostgreSQL repositories via SeaORM, JWT and Argon2 authentication,
//! the in-memory session revocation set, and on-disk cover storage.

pub mod auth;
pub mod database;
pub mod revocation;
pub mod storage;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, connect};
pub use revocation::InMemoryRevocationStore;
pub use storage::DiskFileStore;

//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{FileStore, PostRepository, UserRepository};
use quill_infra::database::{DbConn, PostgresPostRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub files: Arc<dyn FileStore>,
}

impl AppState {
    /// Build the application state over a connected database pool.
    pub fn new(db: DbConn, files: Arc<dyn FileStore>) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db)),
            files,
        }
    }
}

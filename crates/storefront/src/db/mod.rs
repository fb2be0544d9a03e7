//! Persistence layer for the storefront.
//!
//! Durable storage is an external collaborator here; the storefront only
//! depends on a small key-value contract (`get_item` / `put_item` /
//! `delete_item` / `query_by_user`, keyed by user email and item ID). The
//! in-process repositories in this module implement that contract over
//! `tokio::sync::RwLock`-guarded maps, which is all a single-node deployment
//! needs and keeps the test suite free of external services.
//!
//! All repository methods return a typed [`RepositoryError`] instead of
//! panicking or being caught broadly; callers match on the error kind and
//! decide how to surface it.

pub mod users;
pub mod wishlist;

pub use users::UserRepository;
pub use wishlist::WishlistRepository;

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Backend(String),
}

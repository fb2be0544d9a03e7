//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::{UserRepository, WishlistRepository};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the repositories and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    users: UserRepository,
    wishlist: WishlistRepository,
}

impl AppState {
    /// Create a new application state with empty repositories.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                users: UserRepository::new(),
                wishlist: WishlistRepository::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the user repository.
    #[must_use]
    pub fn users(&self) -> &UserRepository {
        &self.inner.users
    }

    /// Get a reference to the wishlist repository.
    #[must_use]
    pub fn wishlist(&self) -> &WishlistRepository {
        &self.inner.wishlist
    }
}

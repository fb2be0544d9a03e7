//! Wishlist repository.
//!
//! Implements the key-value persistence contract the checkout flow depends
//! on: items are keyed by `(user email, item id)` and queries return items in
//! insertion order, matching how the wishlist page displays them.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use south_core::{Email, ItemId};

use super::RepositoryError;
use crate::models::wishlist::WishlistItem;

/// Repository for per-user wishlist items.
///
/// Cheaply cloneable; clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct WishlistRepository {
    inner: Arc<RwLock<HashMap<Email, Vec<WishlistItem>>>>,
}

impl WishlistRepository {
    /// Create an empty wishlist repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a wishlist item for a user.
    ///
    /// Replacing an existing item keeps its position in the list; new items
    /// append at the end.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store is unavailable.
    pub async fn put_item(
        &self,
        email: &Email,
        item: WishlistItem,
    ) -> Result<(), RepositoryError> {
        let mut store = self.inner.write().await;
        let items = store.entry(email.clone()).or_default();

        match items.iter_mut().find(|i| i.item_id == item.item_id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }

        Ok(())
    }

    /// Get a single wishlist item by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store is unavailable.
    pub async fn get_item(
        &self,
        email: &Email,
        item_id: &ItemId,
    ) -> Result<Option<WishlistItem>, RepositoryError> {
        let store = self.inner.read().await;
        Ok(store
            .get(email)
            .and_then(|items| items.iter().find(|i| &i.item_id == item_id).cloned()))
    }

    /// Delete a wishlist item.
    ///
    /// Returns `true` if the item was present, `false` otherwise - absence
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store is unavailable.
    pub async fn delete_item(
        &self,
        email: &Email,
        item_id: &ItemId,
    ) -> Result<bool, RepositoryError> {
        let mut store = self.inner.write().await;
        let Some(items) = store.get_mut(email) else {
            return Ok(false);
        };

        let before = items.len();
        items.retain(|i| &i.item_id != item_id);
        Ok(items.len() != before)
    }

    /// Get all wishlist items for a user, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store is unavailable.
    pub async fn query_by_user(
        &self,
        email: &Email,
    ) -> Result<Vec<WishlistItem>, RepositoryError> {
        let store = self.inner.read().await;
        Ok(store.get(email).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use south_core::Price;

    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).expect("valid test email")
    }

    fn item(id: &str, name: &str) -> WishlistItem {
        WishlistItem {
            item_id: ItemId::new(id),
            name: name.to_owned(),
            details: format!("Metal: Gold, Weight: 10g, Price: {name}"),
            price: Price::parse("1,000 INR").expect("valid test price"),
            image: String::new(),
            added_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn put_preserves_insertion_order() {
        let repo = WishlistRepository::new();
        let user = email("a@example.com");

        repo.put_item(&user, item("1", "Ring")).await.expect("put");
        repo.put_item(&user, item("2", "Chain")).await.expect("put");
        repo.put_item(&user, item("3", "Bangle")).await.expect("put");

        let items = repo.query_by_user(&user).await.expect("query");
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Ring", "Chain", "Bangle"]);
    }

    #[tokio::test]
    async fn put_replaces_in_place() {
        let repo = WishlistRepository::new();
        let user = email("a@example.com");

        repo.put_item(&user, item("1", "Ring")).await.expect("put");
        repo.put_item(&user, item("2", "Chain")).await.expect("put");
        repo.put_item(&user, item("1", "Gold Ring")).await.expect("put");

        let items = repo.query_by_user(&user).await.expect("query");
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Gold Ring", "Chain"]);
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let repo = WishlistRepository::new();
        let user = email("a@example.com");
        repo.put_item(&user, item("1", "Ring")).await.expect("put");

        assert!(repo.delete_item(&user, &ItemId::new("1")).await.expect("del"));
        assert!(!repo.delete_item(&user, &ItemId::new("1")).await.expect("del"));
        assert!(
            !repo
                .delete_item(&email("ghost@example.com"), &ItemId::new("1"))
                .await
                .expect("del")
        );
    }

    #[tokio::test]
    async fn wishlists_are_isolated_per_user() {
        let repo = WishlistRepository::new();
        repo.put_item(&email("a@example.com"), item("1", "Ring"))
            .await
            .expect("put");

        let other = repo
            .query_by_user(&email("b@example.com"))
            .await
            .expect("query");
        assert!(other.is_empty());
    }
}

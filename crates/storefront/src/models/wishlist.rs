//! Wishlist item model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use south_core::{ItemId, Price};

/// A saved wishlist item.
///
/// The price is stored as a structured [`Price`] set when the item enters
/// the wishlist; it is never re-parsed out of the free-form details text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Catalog item identifier, unique within a user's wishlist.
    pub item_id: ItemId,
    /// Display name.
    pub name: String,
    /// Free-form description (metal, weight, and so on).
    pub details: String,
    /// Unit price in minor currency units.
    pub price: Price,
    /// Image URL, may be empty.
    pub image: String,
    /// When the item was added to the wishlist.
    pub added_at: DateTime<Utc>,
}

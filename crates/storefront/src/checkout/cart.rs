//! The cart store: ordered line items for the active session.

use serde::{Deserialize, Serialize};

use south_core::{ItemId, Price};

/// One line of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog item identifier, unique within the cart.
    pub item_id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price in minor currency units.
    pub unit_price: Price,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Image URL, may be empty.
    pub image: String,
    /// Free-form description.
    pub details: String,
}

impl LineItem {
    /// Line total in minor units, recomputed from the source fields.
    ///
    /// Parsed prices are unbounded and quantities come from the client, so
    /// the multiplication saturates instead of wrapping.
    #[must_use]
    pub fn line_total(&self) -> i64 {
        self.unit_price.amount.saturating_mul(i64::from(self.quantity))
    }
}

/// An ordered collection of line items, owned by one session.
///
/// Insertion order is preserved and item IDs are unique. Mutations targeting
/// an absent item are silent no-ops, never errors: the cart mirrors what the
/// user last saw in the browser, and a stale button press (removing an item
/// twice, adjusting a line that was already removed in another tab) is an
/// expected event, not a fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item with quantity 1.
    ///
    /// Silent no-op if an item with the same `item_id` is already present;
    /// adding does not bump quantities.
    pub fn add(&mut self, item: LineItem) {
        if self.items.iter().any(|i| i.item_id == item.item_id) {
            return;
        }
        self.items.push(LineItem { quantity: 1, ..item });
    }

    /// Set the quantity of the matching line item.
    ///
    /// Quantities below 1 are clamped to 1; removal is its own operation.
    /// Silent no-op if `item_id` is absent.
    pub fn update_quantity(&mut self, item_id: &ItemId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.item_id == item_id) {
            item.quantity = quantity.max(1);
        }
    }

    /// Remove the matching line item. Silent no-op if absent.
    pub fn remove(&mut self, item_id: &ItemId) {
        self.items.retain(|i| &i.item_id != item_id);
    }

    /// Find a line item by display name.
    ///
    /// Checkout action payloads identify lines by name (that is what the
    /// storefront page renders); the first match wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Read-only snapshot of the line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

//! Frozen order snapshots.

use serde::{Deserialize, Serialize};

use super::cart::LineItem;
use super::dispatcher::CheckoutState;

/// A frozen snapshot of a checkout, created by the finalize action.
///
/// Fields are private; once taken, a snapshot cannot be edited through this
/// type. Placing the order (the POST on the order page) is what clears the
/// session keys afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    items: Vec<LineItem>,
    total: i64,
}

impl Order {
    /// Freeze the current cart contents and final price.
    #[must_use]
    pub fn snapshot(state: &CheckoutState) -> Self {
        Self {
            items: state.cart.items().to_vec(),
            total: state.totals.total,
        }
    }

    /// The ordered line items at the time of finalization.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The final price at the time of finalization, in minor units.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.total
    }
}

//! Checkout action dispatch.
//!
//! One [`CheckoutAction`] arrives per request; dispatching mutates the cart,
//! rederives the totals, and describes the result as an [`ActionOutcome`]
//! for the route layer to serialize.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use south_core::Coupon;

use super::calculator::Totals;
use super::cart::{Cart, LineItem};
use super::order::Order;

/// The session-scoped checkout state: cart, active coupon, derived totals.
///
/// Stored as a whole under one session key and passed explicitly through
/// each dispatch; there is no process-wide cart state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutState {
    /// The cart store.
    pub cart: Cart,
    /// The active coupon, if any. Applying a new one replaces it.
    pub coupon: Option<Coupon>,
    /// Totals derived from `cart` and `coupon` at the last recompute.
    pub totals: Totals,
}

/// A client checkout action.
///
/// Deserialized from the `{action, ...}` request payload. An action string
/// outside this set fails deserialization, which the route layer reports as
/// the structured `Invalid action!` failure rather than an HTTP error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CheckoutAction {
    /// Resolve a coupon code and apply its percentage to the cart.
    ApplyCoupon {
        /// Raw coupon code as typed by the user.
        coupon_code: String,
    },
    /// Set the quantity of the line item with the given display name.
    UpdateQuantity {
        /// Display name of the line item.
        item_name: String,
        /// New quantity.
        quantity: u32,
    },
    /// Remove the line item with the given display name.
    Remove {
        /// Display name of the line item.
        item_name: String,
    },
    /// Freeze the cart into an order snapshot.
    Finalize,
}

/// The result of dispatching one action.
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    /// A coupon was applied (possibly a 0% one for unknown codes).
    CouponApplied {
        /// Discount amount in minor units.
        discount: i64,
        /// New final price in minor units.
        total: i64,
    },
    /// A quantity was updated (or silently left alone for an unknown name).
    QuantityUpdated {
        /// New final price in minor units.
        total: i64,
    },
    /// An item was removed (or silently absent).
    Removed {
        /// Display name from the request, echoed in the response message.
        item_name: String,
        /// New final price in minor units.
        total: i64,
    },
    /// The cart was frozen into an order.
    Finalized {
        /// The immutable order snapshot.
        order: Order,
    },
}

impl CheckoutState {
    /// The active coupon percentage, or zero when no coupon is applied.
    #[must_use]
    pub fn coupon_percentage(&self) -> Decimal {
        self.coupon
            .as_ref()
            .map_or(Decimal::ZERO, |c| c.percentage)
    }

    /// Rederive the totals from the cart and the stored coupon percentage.
    ///
    /// The percentage is applied fresh to the current subtotal on every
    /// recompute; the discount amount is never carried over from an earlier
    /// state of the cart.
    pub fn recompute(&mut self) {
        self.totals = Totals::compute(&self.cart, self.coupon_percentage());
    }

    /// Add an item to the cart and recompute totals.
    ///
    /// Silent no-op (apart from the recompute) if the item is already in
    /// the cart.
    pub fn add_item(&mut self, item: LineItem) {
        self.cart.add(item);
        self.recompute();
    }

    /// Apply one checkout action.
    ///
    /// Every arm recomputes the totals before returning, so the outcome
    /// always reflects the post-action state.
    pub fn dispatch(&mut self, action: CheckoutAction) -> ActionOutcome {
        match action {
            CheckoutAction::ApplyCoupon { coupon_code } => {
                self.coupon = Some(Coupon::resolve(&coupon_code));
                self.recompute();
                ActionOutcome::CouponApplied {
                    discount: self.totals.discount,
                    total: self.totals.total,
                }
            }
            CheckoutAction::UpdateQuantity {
                item_name,
                quantity,
            } => {
                if let Some(item_id) = self
                    .cart
                    .find_by_name(&item_name)
                    .map(|i| i.item_id.clone())
                {
                    self.cart.update_quantity(&item_id, quantity);
                }
                self.recompute();
                ActionOutcome::QuantityUpdated {
                    total: self.totals.total,
                }
            }
            CheckoutAction::Remove { item_name } => {
                if let Some(item_id) = self
                    .cart
                    .find_by_name(&item_name)
                    .map(|i| i.item_id.clone())
                {
                    self.cart.remove(&item_id);
                }
                self.recompute();
                ActionOutcome::Removed {
                    item_name,
                    total: self.totals.total,
                }
            }
            CheckoutAction::Finalize => {
                self.recompute();
                ActionOutcome::Finalized {
                    order: Order::snapshot(self),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use south_core::{CurrencyCode, ItemId, Price};

    use super::*;

    fn line(id: &str, name: &str, price: i64) -> LineItem {
        LineItem {
            item_id: ItemId::new(id),
            name: name.to_owned(),
            unit_price: Price::new(price, CurrencyCode::Inr),
            quantity: 1,
            image: String::new(),
            details: String::new(),
        }
    }

    fn apply(state: &mut CheckoutState, code: &str) -> (i64, i64) {
        match state.dispatch(CheckoutAction::ApplyCoupon {
            coupon_code: code.to_owned(),
        }) {
            ActionOutcome::CouponApplied { discount, total } => (discount, total),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn apply_coupon_discounts_the_subtotal() {
        let mut state = CheckoutState::default();
        state.add_item(line("1", "Ring", 1_000));

        let (discount, total) = apply(&mut state, "WON20");
        assert_eq!(discount, 200);
        assert_eq!(total, 800);
    }

    #[test]
    fn unknown_coupon_yields_zero_discount() {
        let mut state = CheckoutState::default();
        state.add_item(line("1", "Ring", 1_000));

        let (discount, total) = apply(&mut state, "NOPE");
        assert_eq!(discount, 0);
        assert_eq!(total, 1_000);
    }

    #[test]
    fn coupons_replace_rather_than_stack() {
        let mut state = CheckoutState::default();
        state.add_item(line("1", "Ring", 1_000));

        apply(&mut state, "WON30");
        let (discount, total) = apply(&mut state, "WON10");
        assert_eq!(discount, 100);
        assert_eq!(total, 900);
    }

    #[test]
    fn update_quantity_on_unknown_name_keeps_totals() {
        let mut state = CheckoutState::default();
        state.add_item(line("1", "Ring", 1_000));

        let outcome = state.dispatch(CheckoutAction::UpdateQuantity {
            item_name: "Tiara".to_owned(),
            quantity: 5,
        });
        let ActionOutcome::QuantityUpdated { total } = outcome else {
            panic!("unexpected outcome");
        };
        assert_eq!(total, 1_000);
        assert_eq!(state.cart.items()[0].quantity, 1);
    }

    #[test]
    fn removing_the_only_item_clamps_to_zero() {
        let mut state = CheckoutState::default();
        state.add_item(line("1", "Ring", 1_000));
        apply(&mut state, "WON20");

        let outcome = state.dispatch(CheckoutAction::Remove {
            item_name: "Ring".to_owned(),
        });
        let ActionOutcome::Removed { total, .. } = outcome else {
            panic!("unexpected outcome");
        };
        assert_eq!(total, 0);
        assert_eq!(state.totals.subtotal, 0);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn discount_is_recomputed_from_percentage_not_frozen() {
        // add "1,000 INR" item, win 10% off, then triple the quantity:
        // the discount tracks the new subtotal
        let mut state = CheckoutState::default();
        state.add_item(line("a", "Kundan Ring", 1_000));

        let (discount, total) = apply(&mut state, "WON10");
        assert_eq!(discount, 100);
        assert_eq!(total, 900);

        state.dispatch(CheckoutAction::UpdateQuantity {
            item_name: "Kundan Ring".to_owned(),
            quantity: 3,
        });
        assert_eq!(state.totals.subtotal, 3_000);
        assert_eq!(state.totals.discount, 300);
        assert_eq!(state.totals.total, 2_700);

        let ActionOutcome::Finalized { order } = state.dispatch(CheckoutAction::Finalize) else {
            panic!("unexpected outcome");
        };
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity, 3);
        assert_eq!(order.total(), 2_700);
    }

    #[test]
    fn finalize_on_empty_cart_yields_empty_order() {
        let mut state = CheckoutState::default();
        let ActionOutcome::Finalized { order } = state.dispatch(CheckoutAction::Finalize) else {
            panic!("unexpected outcome");
        };
        assert!(order.items().is_empty());
        assert_eq!(order.total(), 0);
    }

    #[test]
    fn unknown_action_fails_deserialization() {
        let payload = serde_json::json!({ "action": "foo" });
        assert!(serde_json::from_value::<CheckoutAction>(payload).is_err());
    }
}

//! Derived cart totals.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::cart::{Cart, LineItem};

/// Subtotal, discount, and final total for a cart, in minor currency units.
///
/// Always derived from the cart and the active coupon percentage; never
/// mutated independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line totals.
    pub subtotal: i64,
    /// Discount amount taken off the subtotal.
    pub discount: i64,
    /// `subtotal - discount`, clamped at zero.
    pub total: i64,
}

impl Totals {
    /// Compute totals for a cart under a coupon percentage.
    ///
    /// The discount is `floor(subtotal * percentage)`: the multiplication
    /// happens in fixed-point `Decimal` and any fractional minor unit is
    /// dropped, so the result stays an exact integer. The total is clamped
    /// at zero; an oversized discount can never produce a negative price.
    ///
    /// Pure and idempotent over its inputs.
    #[must_use]
    pub fn compute(cart: &Cart, percentage: Decimal) -> Self {
        // Saturating throughout: line totals are products of unbounded
        // parsed prices and client-supplied quantities.
        let subtotal = cart
            .items()
            .iter()
            .map(LineItem::line_total)
            .fold(0_i64, i64::saturating_add);

        let discount = (Decimal::from(subtotal) * percentage)
            .floor()
            .to_i64()
            .unwrap_or(0);
        let total = subtotal.saturating_sub(discount).max(0);

        Self {
            subtotal,
            discount,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use south_core::{Coupon, CurrencyCode, ItemId, Price};

    use super::*;

    fn cart_with(prices: &[(i64, u32)]) -> Cart {
        let mut cart = Cart::new();
        for (n, (price, quantity)) in prices.iter().enumerate() {
            cart.add(LineItem {
                item_id: ItemId::new(n.to_string()),
                name: format!("item-{n}"),
                unit_price: Price::new(*price, CurrencyCode::Inr),
                quantity: 1,
                image: String::new(),
                details: String::new(),
            });
            cart.update_quantity(&ItemId::new(n.to_string()), *quantity);
        }
        cart
    }

    #[test]
    fn subtotal_is_sum_of_line_totals() {
        let cart = cart_with(&[(1_000, 2), (350, 3)]);
        let totals = Totals::compute(&cart, Decimal::ZERO);
        assert_eq!(totals.subtotal, 2_000 + 1_050);
        assert_eq!(totals.discount, 0);
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn twenty_percent_off_one_thousand() {
        let cart = cart_with(&[(1_000, 1)]);
        let totals = Totals::compute(&cart, Coupon::resolve("WON20").percentage);
        assert_eq!(totals.subtotal, 1_000);
        assert_eq!(totals.discount, 200);
        assert_eq!(totals.total, 800);
    }

    #[test]
    fn fractional_discount_is_floored() {
        // 10% of 1,005 is 100.5 minor units; the half unit is dropped
        let cart = cart_with(&[(1_005, 1)]);
        let totals = Totals::compute(&cart, Coupon::resolve("WON10").percentage);
        assert_eq!(totals.discount, 100);
        assert_eq!(totals.total, 905);
    }

    #[test]
    fn compute_is_idempotent() {
        let cart = cart_with(&[(1_000, 2), (500, 1)]);
        let pct = Coupon::resolve("WON30").percentage;
        let first = Totals::compute(&cart, pct);
        let second = Totals::compute(&cart, pct);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let totals = Totals::compute(&Cart::new(), Coupon::resolve("WON30").percentage);
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn oversized_amounts_saturate_instead_of_wrapping() {
        // a maximal parsed price times a client quantity must not wrap the
        // subtotal negative
        let cart = cart_with(&[(i64::MAX, 2), (1_000, 1)]);
        let totals = Totals::compute(&cart, Decimal::ZERO);
        assert_eq!(totals.subtotal, i64::MAX);
        assert_eq!(totals.total, i64::MAX);
    }

    #[test]
    fn total_never_goes_negative() {
        let cart = cart_with(&[(100, 1)]);
        // a percentage above 1 models a discount exceeding the subtotal
        let totals = Totals::compute(&cart, Decimal::new(150, 2));
        assert_eq!(totals.discount, 150);
        assert_eq!(totals.total, 0);
    }
}

//! Coupon codes and discount resolution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named discount rule applied to a cart's subtotal.
///
/// The percentage is a fixed-point fraction in `[0, 1]`. At most one coupon
/// is active per cart; applying a new one replaces the old, never stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Normalized (upper-cased) coupon code.
    pub code: String,
    /// Discount fraction of the subtotal, in `[0, 1]`.
    pub percentage: Decimal,
}

impl Coupon {
    /// Resolve a coupon code to its discount rule.
    ///
    /// Comparison is case-insensitive. Unknown codes resolve to a 0%
    /// discount rather than an error - entering a bad code at checkout is an
    /// expected path, not a failure.
    #[must_use]
    pub fn resolve(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        let percentage = match code.as_str() {
            "WON10" => Decimal::new(10, 2),
            "WON20" => Decimal::new(20, 2),
            "WON30" => Decimal::new(30, 2),
            _ => Decimal::ZERO,
        };

        Self { code, percentage }
    }

    /// Whether this coupon actually grants a discount.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.percentage > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes() {
        assert_eq!(Coupon::resolve("WON10").percentage, Decimal::new(10, 2));
        assert_eq!(Coupon::resolve("WON20").percentage, Decimal::new(20, 2));
        assert_eq!(Coupon::resolve("WON30").percentage, Decimal::new(30, 2));
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let coupon = Coupon::resolve("won20");
        assert_eq!(coupon.code, "WON20");
        assert_eq!(coupon.percentage, Decimal::new(20, 2));
    }

    #[test]
    fn unknown_codes_resolve_to_zero_percent() {
        let coupon = Coupon::resolve("SAVEBIG");
        assert_eq!(coupon.percentage, Decimal::ZERO);
        assert!(!coupon.is_recognized());
    }
}

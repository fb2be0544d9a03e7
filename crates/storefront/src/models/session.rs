//! Session-related types.
//!
//! Types stored in the session for authentication and checkout state.

use serde::{Deserialize, Serialize};

use south_core::Email;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's email address (the user identifier).
    pub email: Email,
    /// User's display name.
    pub username: String,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the per-session checkout state (cart, coupon, totals).
    pub const CHECKOUT: &str = "checkout";

    /// Key for the finalized order awaiting placement.
    pub const ORDER: &str = "order";

    /// Key for the quiz-win flag that unlocks discount coupons.
    pub const WON_QUIZ: &str = "won_quiz";
}

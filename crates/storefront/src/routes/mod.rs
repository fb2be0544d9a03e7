//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Home page
//! GET  /health             - Health check
//! GET  /dashboard          - User dashboard (requires auth)
//!
//! # Auth
//! GET  /auth/login         - Login page
//! POST /auth/login         - Login action
//! GET  /auth/register      - Register page
//! POST /auth/register      - Register action
//! POST /auth/logout        - Logout action
//!
//! # Wishlist
//! GET  /wishlist           - Wishlist page
//! GET  /wishlist/data      - Wishlist items (JSON)
//! POST /wishlist/add       - Add item (JSON)
//! POST /wishlist/remove    - Remove item (JSON)
//!
//! # Exhibition
//! GET  /exhibition         - Virtual exhibition page
//! POST /exhibition         - Add an exhibition piece to the wishlist (JSON)
//!
//! # Quiz
//! GET  /quiz               - Quiz page
//! POST /quiz               - Submit score; a win unlocks coupons
//!
//! # Checkout
//! GET  /checkout           - Checkout page (recomputes totals)
//! POST /checkout           - Dispatch one checkout action (JSON)
//! GET  /checkout/items     - Cart line items (JSON)
//! POST /checkout/add       - Copy a wishlist item into the cart (JSON)
//!
//! # Order
//! GET  /order              - Order summary page
//! POST /order              - Place the order and clear the session cart
//! ```

pub mod auth;
pub mod checkout;
pub mod exhibition;
pub mod home;
pub mod order;
pub mod quiz;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// JSON payload returned by the wishlist and checkout action endpoints.
///
/// Every response carries `success`; the numeric fields are present only
/// when the action produced them. Amounts are minor currency units.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl ApiResponse {
    /// A success with a message.
    #[must_use]
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// A structured failure with a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/data", get(wishlist::data))
        .route("/add", post(wishlist::add))
        .route("/remove", post(wishlist::remove))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show).post(checkout::action))
        .route("/items", get(checkout::items))
        .route("/add", post(checkout::add))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Dashboard
        .route("/dashboard", get(home::dashboard))
        // Auth routes
        .nest("/auth", auth_routes())
        // Wishlist routes
        .nest("/wishlist", wishlist_routes())
        // Exhibition
        .route(
            "/exhibition",
            get(exhibition::show).post(exhibition::add_item),
        )
        // Quiz
        .route("/quiz", get(quiz::show).post(quiz::submit))
        // Checkout routes
        .nest("/checkout", checkout_routes())
        // Order
        .route("/order", get(order::show).post(order::place))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_action_payload_is_exact() {
        // The checkout action handler answers unknown action strings with
        // this payload verbatim; the frontend matches on it.
        let response = ApiResponse::failure("Invalid action!");
        let json = serde_json::to_string(&response).expect("serialize");
        assert_eq!(json, r#"{"success":false,"message":"Invalid action!"}"#);
    }

    #[test]
    fn absent_fields_are_omitted_from_the_wire() {
        let response = ApiResponse {
            success: true,
            discount: Some(100),
            total_price: Some(900),
            ..ApiResponse::default()
        };
        let json = serde_json::to_string(&response).expect("serialize");
        assert_eq!(json, r#"{"success":true,"discount":100,"total_price":900}"#);
    }
}

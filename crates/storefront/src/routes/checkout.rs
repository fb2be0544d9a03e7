//! Checkout route handlers.
//!
//! The page handler recomputes totals on every view; the action handler
//! loads the session [`CheckoutState`], dispatches exactly one action, and
//! writes the state back. Unknown action strings are answered with the
//! structured `Invalid action!` failure, never an HTTP error.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use south_core::Price;

use crate::checkout::{ActionOutcome, CheckoutAction, CheckoutState, LineItem};
use crate::error::Result;
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::session_keys;
use crate::routes::ApiResponse;
use crate::state::AppState;

// =============================================================================
// Payload Types
// =============================================================================

/// Add-to-checkout request payload.
#[derive(Debug, Deserialize)]
pub struct AddPayload {
    pub item_id: Option<String>,
}

/// Cart line items JSON projection.
#[derive(Debug, Serialize)]
pub struct CheckoutItems {
    pub checkout_items: Vec<LineItem>,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart line display data for templates.
pub struct CartItemView {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image: String,
    pub details: String,
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            item_id: line.item_id.to_string(),
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
            line_total: Price::new(line.line_total(), line.unit_price.currency).to_string(),
            image: line.image.clone(),
            details: line.details.clone(),
        }
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub items: Vec<CartItemView>,
    pub subtotal: i64,
    pub discount: i64,
    pub total_price: i64,
    pub coupon_code: String,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the checkout state from the session, defaulting to an empty cart.
async fn load_checkout(session: &Session) -> Result<CheckoutState> {
    Ok(session
        .get::<CheckoutState>(session_keys::CHECKOUT)
        .await?
        .unwrap_or_default())
}

/// Write the checkout state back to the session.
async fn save_checkout(session: &Session, state: &CheckoutState) -> Result<()> {
    session.insert(session_keys::CHECKOUT, state).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the checkout page.
///
/// Totals are rederived from the cart and coupon before rendering, so the
/// page never shows stale figures.
#[instrument(skip_all)]
pub async fn show(RequireAuth(_user): RequireAuth, session: Session) -> Result<impl IntoResponse> {
    let mut state = load_checkout(&session).await?;
    state.recompute();
    save_checkout(&session, &state).await?;

    Ok(CheckoutTemplate {
        items: state.cart.items().iter().map(CartItemView::from).collect(),
        subtotal: state.totals.subtotal,
        discount: state.totals.discount,
        total_price: state.totals.total,
        coupon_code: state.coupon.as_ref().map(|c| c.code.clone()).unwrap_or_default(),
    })
}

/// Dispatch one checkout action.
#[instrument(skip_all)]
pub async fn action(
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ApiResponse>> {
    if user.is_none() {
        return Ok(Json(ApiResponse::failure("Not logged in")));
    }

    // An unknown action string fails deserialization; that is the one
    // validated error path of the flow and it stays a structured failure.
    let Ok(action) = serde_json::from_value::<CheckoutAction>(payload) else {
        return Ok(Json(ApiResponse::failure("Invalid action!")));
    };

    let mut state = load_checkout(&session).await?;
    let outcome = state.dispatch(action);
    save_checkout(&session, &state).await?;

    let response = match outcome {
        ActionOutcome::CouponApplied { discount, total } => ApiResponse {
            success: true,
            discount: Some(discount),
            total_price: Some(total),
            ..ApiResponse::default()
        },
        ActionOutcome::QuantityUpdated { total } => ApiResponse {
            success: true,
            total_price: Some(total),
            ..ApiResponse::default()
        },
        ActionOutcome::Removed { item_name, total } => ApiResponse {
            success: true,
            message: Some(format!("Item {item_name} removed from checkout!")),
            total_price: Some(total),
            ..ApiResponse::default()
        },
        ActionOutcome::Finalized { order } => {
            session.insert(session_keys::ORDER, &order).await?;
            ApiResponse {
                success: true,
                redirect: Some("/order".to_owned()),
                ..ApiResponse::default()
            }
        }
    };

    Ok(Json(response))
}

/// Cart line items as JSON, for the frontend.
///
/// Anonymous sessions get an empty list rather than a failure.
#[instrument(skip_all)]
pub async fn items(
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> Result<Json<CheckoutItems>> {
    if user.is_none() {
        return Ok(Json(CheckoutItems {
            checkout_items: Vec::new(),
        }));
    }

    let state = load_checkout(&session).await?;
    Ok(Json(CheckoutItems {
        checkout_items: state.cart.items().to_vec(),
    }))
}

/// Copy a wishlist item into the cart.
///
/// Adding an item already in the cart is a silent no-op; the wishlist is
/// left untouched either way.
#[instrument(skip_all)]
pub async fn add(
    State(app): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Json(payload): Json<AddPayload>,
) -> Result<Json<ApiResponse>> {
    let Some(user) = user else {
        return Ok(Json(ApiResponse::failure("Not logged in")));
    };

    let Some(item_id) = payload.item_id.filter(|id| !id.is_empty()) else {
        return Ok(Json(ApiResponse::failure("Item ID missing")));
    };

    let item = match app
        .wishlist()
        .get_item(&user.email, &south_core::ItemId::new(item_id))
        .await
    {
        Ok(Some(item)) => item,
        Ok(None) => {
            return Ok(Json(ApiResponse::failure("Item not found in wishlist")));
        }
        Err(e) => return Ok(Json(ApiResponse::failure(e.to_string()))),
    };

    let mut state = load_checkout(&session).await?;
    state.add_item(LineItem {
        item_id: item.item_id,
        name: item.name,
        unit_price: item.price,
        quantity: 1,
        image: item.image,
        details: item.details,
    });
    save_checkout(&session, &state).await?;

    Ok(Json(ApiResponse::ok_message("Item added to checkout")))
}

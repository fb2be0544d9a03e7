//! Wishlist route handlers.
//!
//! The wishlist JSON endpoints report domain failures as structured
//! `{success, message}` payloads; repository failures are recovered locally
//! and reported the same way, never as HTTP errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use south_core::{ItemId, Price};

use crate::error::Result;
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::wishlist::WishlistItem;
use crate::routes::ApiResponse;
use crate::state::AppState;

// =============================================================================
// Payload Types
// =============================================================================

/// Add-to-wishlist request payload.
#[derive(Debug, Deserialize)]
pub struct AddPayload {
    pub item_id: String,
    pub item_name: String,
    pub item_details: String,
    /// Display price string, e.g. `"3,50,000 INR"`. Parsed once, here.
    pub price: String,
    #[serde(default)]
    pub item_image: String,
}

/// Remove-from-wishlist request payload.
#[derive(Debug, Deserialize)]
pub struct RemovePayload {
    pub item_id: Option<String>,
}

/// Wishlist JSON projection.
#[derive(Debug, Serialize)]
pub struct WishlistData {
    pub wishlist: Vec<WishlistItem>,
}

// =============================================================================
// Templates
// =============================================================================

/// Wishlist item display data for templates.
pub struct WishlistItemView {
    pub item_id: String,
    pub name: String,
    pub details: String,
    pub price: String,
    pub image: String,
}

impl From<&WishlistItem> for WishlistItemView {
    fn from(item: &WishlistItem) -> Self {
        Self {
            item_id: item.item_id.to_string(),
            name: item.name.clone(),
            details: item.details.clone(),
            price: item.price.to_string(),
            image: item.image.clone(),
        }
    }
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist/show.html")]
pub struct WishlistTemplate {
    pub items: Vec<WishlistItemView>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the wishlist page.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse> {
    let items = state.wishlist().query_by_user(&user.email).await?;

    Ok(WishlistTemplate {
        items: items.iter().map(WishlistItemView::from).collect(),
    })
}

/// Wishlist items as JSON.
///
/// Anonymous sessions get an empty list rather than a failure.
#[instrument(skip_all)]
pub async fn data(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Json<WishlistData> {
    let wishlist = match user {
        Some(user) => match state.wishlist().query_by_user(&user.email).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "failed to query wishlist");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    Json(WishlistData { wishlist })
}

/// Add an item to the wishlist.
#[instrument(skip_all)]
pub async fn add(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Json(payload): Json<AddPayload>,
) -> Json<ApiResponse> {
    let Some(user) = user else {
        return Json(ApiResponse::failure("Not logged in"));
    };

    // Parse the price at the ingestion boundary; downstream code only ever
    // sees the structured form.
    let price = match Price::parse(&payload.price) {
        Ok(price) => price,
        Err(e) => return Json(ApiResponse::failure(format!("Invalid price: {e}"))),
    };

    let item = WishlistItem {
        item_id: ItemId::new(payload.item_id),
        name: payload.item_name,
        details: payload.item_details,
        price,
        image: payload.item_image,
        added_at: Utc::now(),
    };

    match state.wishlist().put_item(&user.email, item).await {
        Ok(()) => Json(ApiResponse::ok_message("Item added to wishlist")),
        Err(e) => Json(ApiResponse::failure(format!("Error: {e}"))),
    }
}

/// Remove an item from the wishlist.
#[instrument(skip_all)]
pub async fn remove(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Json(payload): Json<RemovePayload>,
) -> Json<ApiResponse> {
    let Some(user) = user else {
        return Json(ApiResponse::failure("Not logged in"));
    };

    let Some(item_id) = payload.item_id.filter(|id| !id.is_empty()) else {
        return Json(ApiResponse::failure("Item ID not provided"));
    };

    match state
        .wishlist()
        .delete_item(&user.email, &ItemId::new(item_id))
        .await
    {
        Ok(_) => Json(ApiResponse::ok_message("Item removed from wishlist")),
        Err(e) => Json(ApiResponse::failure(format!("Error: {e}"))),
    }
}

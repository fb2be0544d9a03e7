//! Virtual exhibition route handlers.
//!
//! The exhibition shows catalog pieces; a logged-in visitor can add one to
//! their wishlist straight from the page. Piece submissions carry their full
//! details, so this is the second ingestion boundary where a display price
//! string becomes a structured [`Price`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use south_core::{ItemId, Price};

use crate::middleware::OptionalAuth;
use crate::models::wishlist::WishlistItem;
use crate::routes::ApiResponse;
use crate::state::AppState;

/// Exhibition piece payload.
///
/// All fields are required; the fields arrive as empty strings when the
/// browser submits an incomplete form.
#[derive(Debug, Deserialize)]
pub struct PiecePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub metal: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
}

/// Exhibition page template.
#[derive(Template, WebTemplate)]
#[template(path = "exhibition/show.html")]
pub struct ExhibitionTemplate {
    pub logged_in: bool,
}

/// Display the exhibition page.
pub async fn show(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    ExhibitionTemplate {
        logged_in: user.is_some(),
    }
}

/// Add an exhibition piece to the visitor's wishlist.
#[instrument(skip_all)]
pub async fn add_item(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Json(payload): Json<PiecePayload>,
) -> Json<ApiResponse> {
    let Some(user) = user else {
        return Json(ApiResponse::failure(
            "User not logged in. Please log in to add items to your wishlist.",
        ));
    };

    if [
        &payload.name,
        &payload.metal,
        &payload.weight,
        &payload.price,
        &payload.image,
    ]
    .iter()
    .any(|field| field.is_empty())
    {
        return Json(ApiResponse::failure("Invalid item data. Please try again."));
    }

    let price = match Price::parse(&payload.price) {
        Ok(price) => price,
        Err(e) => return Json(ApiResponse::failure(format!("Invalid price: {e}"))),
    };

    let item = WishlistItem {
        // exhibition pieces are keyed by name in the catalog
        item_id: ItemId::new(payload.name.clone()),
        name: payload.name.clone(),
        details: format!(
            "Metal: {}, Weight: {}, Price: {price}",
            payload.metal, payload.weight
        ),
        price,
        image: payload.image,
        added_at: Utc::now(),
    };

    match state.wishlist().put_item(&user.email, item).await {
        Ok(()) => Json(ApiResponse::ok_message(format!(
            "Item \"{}\" added to wishlist successfully!",
            payload.name
        ))),
        Err(e) => Json(ApiResponse::failure(format!(
            "Error adding item to wishlist: {e}"
        ))),
    }
}

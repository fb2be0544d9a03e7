//! Order route handlers.
//!
//! The order page renders the frozen snapshot produced by the finalize
//! action. Placing the order clears the order and checkout session keys;
//! that is the point where the cart's lifecycle ends.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::checkout::{CheckoutState, Order};
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::session_keys;
use crate::routes::checkout::CartItemView;

/// Order placement form data.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub payment_method: String,
}

/// Order page template.
#[derive(Template, WebTemplate)]
#[template(path = "order/show.html")]
pub struct OrderTemplate {
    pub items: Vec<CartItemView>,
    pub total_price: i64,
    pub order_completed: bool,
}

/// Display the order summary page.
#[instrument(skip_all)]
pub async fn show(RequireAuth(_user): RequireAuth, session: Session) -> Result<impl IntoResponse> {
    let order = session.get::<Order>(session_keys::ORDER).await?;

    Ok(match order {
        Some(order) => OrderTemplate {
            items: order.items().iter().map(CartItemView::from).collect(),
            total_price: order.total(),
            order_completed: false,
        },
        None => OrderTemplate {
            items: Vec::new(),
            total_price: 0,
            order_completed: false,
        },
    })
}

/// Place the order.
///
/// Logs the shipping details, then clears the order and checkout session
/// keys so the next add-to-checkout starts a fresh cart.
#[instrument(skip_all)]
pub async fn place(
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<PlaceOrderForm>,
) -> Result<impl IntoResponse> {
    tracing::info!(
        user = %user.email,
        customer = %format!("{} {}", form.first_name, form.last_name),
        address = %format!(
            "{}, {}, {}, {}",
            form.street_address, form.city, form.state, form.postal_code
        ),
        payment_method = %form.payment_method,
        "order placed"
    );

    session.remove::<Order>(session_keys::ORDER).await?;
    session
        .remove::<CheckoutState>(session_keys::CHECKOUT)
        .await?;

    Ok(OrderTemplate {
        items: Vec::new(),
        total_price: 0,
        order_completed: true,
    })
}

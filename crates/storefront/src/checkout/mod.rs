//! Checkout flow: cart store, totals calculator, action dispatcher, order
//! snapshot.
//!
//! The checkout state lives in the session, not in process globals. Each
//! request loads a [`CheckoutState`], dispatches one [`CheckoutAction`]
//! against it, and writes it back; subtotal, discount, and total are always
//! rederived from the line items and the active coupon percentage, never
//! trusted from a previous request.

pub mod calculator;
pub mod cart;
pub mod dispatcher;
pub mod order;

pub use calculator::Totals;
pub use cart::{Cart, LineItem};
pub use dispatcher::{ActionOutcome, CheckoutAction, CheckoutState};
pub use order::Order;

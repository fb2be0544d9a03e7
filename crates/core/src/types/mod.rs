//! Core types for the South storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod coupon;
pub mod email;
pub mod id;
pub mod price;

pub use coupon::Coupon;
pub use email::{Email, EmailError};
pub use id::ItemId;
pub use price::{CurrencyCode, Price, PriceParseError};

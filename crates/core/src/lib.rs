//! South Core - Shared types library.
//!
//! This crate provides common types used across the South jewelry storefront:
//! - `storefront` - Public-facing e-commerce site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no session access.
//! Money is represented in minor currency units to keep cart arithmetic exact;
//! coupon percentages use `rust_decimal` so discounts never go through floats.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices, coupons, emails, and item IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

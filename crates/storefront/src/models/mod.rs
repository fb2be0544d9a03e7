//! Domain models for the storefront.

pub mod session;
pub mod user;
pub mod wishlist;

pub use session::CurrentUser;
pub use session::keys as session_keys;
pub use user::User;
pub use wishlist::WishlistItem;

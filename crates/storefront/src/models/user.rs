//! User model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use south_core::Email;

/// A registered storefront user.
///
/// The password hash is deliberately not part of this type; it stays inside
/// the user repository and the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Email address, also the user's unique identifier.
    pub email: Email,
    /// Display name chosen at registration.
    pub username: String,
    /// Number of successful logins.
    pub login_count: u32,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

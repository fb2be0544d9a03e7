//! User repository.
//!
//! Users are keyed by email address. The password hash never leaves this
//! module except through [`UserRepository::get_password_hash`], which the
//! auth service uses for verification.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use south_core::Email;

use super::RepositoryError;
use crate::models::user::User;

/// Internal stored form of a user, including the password hash.
#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
}

/// Repository for user records.
///
/// Cheaply cloneable; clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    inner: Arc<RwLock<HashMap<Email, UserRecord>>>,
}

impl UserRepository {
    /// Create an empty user repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store is unavailable.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let store = self.inner.read().await;
        Ok(store.get(email).map(|r| r.user.clone()))
    }

    /// Create a new user with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    pub async fn create(
        &self,
        email: &Email,
        username: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let mut store = self.inner.write().await;

        if store.contains_key(email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let user = User {
            email: email.clone(),
            username: username.to_owned(),
            login_count: 0,
            created_at: Utc::now(),
        };
        store.insert(
            email.clone(),
            UserRecord {
                user: user.clone(),
                password_hash: password_hash.to_owned(),
            },
        );

        Ok(user)
    }

    /// Get a user together with their password hash, for credential checks.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store is unavailable.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let store = self.inner.read().await;
        Ok(store
            .get(email)
            .map(|r| (r.user.clone(), r.password_hash.clone())))
    }

    /// Increment the login counter for a user.
    ///
    /// Silent no-op if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Backend` if the store is unavailable.
    pub async fn record_login(&self, email: &Email) -> Result<(), RepositoryError> {
        let mut store = self.inner.write().await;
        if let Some(record) = store.get_mut(email) {
            record.user.login_count += 1;
        }
        Ok(())
    }
}

//! Authentication service.
//!
//! Password registration and login over the user repository. Passwords are
//! hashed with Argon2id; the hash never leaves the db layer except for
//! verification here.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use south_core::Email;

use crate::db::{RepositoryError, UserRepository};
use crate::models::user::User;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
pub struct AuthService<'a> {
    users: &'a UserRepository,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a UserRepository) -> Self {
        Self { users }
    }

    /// Register a new user with email, username, and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(&email, username, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with email and password.
    ///
    /// Increments the user's login counter on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let (user, password_hash) = self
            .users
            .get_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        self.users.record_login(&email).await?;

        Ok(user)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_and_login_round_trip() {
        let users = UserRepository::new();
        let auth = AuthService::new(&users);

        let user = auth
            .register("asha@example.com", "asha", "a-strong-password")
            .await
            .expect("register");
        assert_eq!(user.username, "asha");

        let logged_in = auth
            .login("asha@example.com", "a-strong-password")
            .await
            .expect("login");
        assert_eq!(logged_in.email.as_str(), "asha@example.com");
        assert_eq!(logged_in.login_count, 0); // counter incremented after fetch

        let again = auth
            .login("asha@example.com", "a-strong-password")
            .await
            .expect("login");
        assert_eq!(again.login_count, 1);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let users = UserRepository::new();
        let auth = AuthService::new(&users);
        auth.register("asha@example.com", "asha", "a-strong-password")
            .await
            .expect("register");

        let err = auth
            .login("asha@example.com", "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let users = UserRepository::new();
        let auth = AuthService::new(&users);

        let err = auth
            .login("ghost@example.com", "whatever-password")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let users = UserRepository::new();
        let auth = AuthService::new(&users);

        let err = auth
            .register("asha@example.com", "asha", "short")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let users = UserRepository::new();
        let auth = AuthService::new(&users);
        auth.register("asha@example.com", "asha", "a-strong-password")
            .await
            .expect("register");

        let err = auth
            .register("asha@example.com", "asha2", "another-password")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
    }
}

//! Authentication route handlers.
//!
//! Classic form-based registration and login. Successful login stores a
//! [`CurrentUser`] in the session and bumps the user's login counter.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: String,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate {
        error: String::new(),
    }
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.users());

    match auth.login(&form.email, &form.password).await {
        Ok(user) => {
            let current = CurrentUser {
                email: user.email,
                username: user.username,
            };
            set_current_user(&session, &current).await?;
            tracing::info!(user = %current.email, "user logged in");
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(e) => {
            tracing::debug!(error = %e, "login rejected");
            Ok(LoginTemplate {
                error: "Invalid credentials! Please try again.".to_owned(),
            }
            .into_response())
        }
    }
}

/// Display the registration page.
pub async fn register_page() -> impl IntoResponse {
    RegisterTemplate {
        error: String::new(),
    }
}

/// Handle registration form submission.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.users());

    match auth
        .register(&form.email, &form.username, &form.password)
        .await
    {
        Ok(user) => {
            tracing::info!(user = %user.email, "user registered");
            Ok(Redirect::to("/auth/login").into_response())
        }
        Err(e) => Ok(RegisterTemplate {
            error: e.to_string(),
        }
        .into_response()),
    }
}

/// Handle logout.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Response> {
    clear_current_user(&session).await?;
    Ok(Redirect::to("/auth/login").into_response())
}

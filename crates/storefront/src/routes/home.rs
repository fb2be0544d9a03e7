//! Home page and dashboard route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::session_keys;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub logged_in: bool,
    pub username: String,
}

/// User dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub username: String,
    /// Whether the quiz has been won; unlocks the coupon codes.
    pub won_quiz: bool,
}

/// Display the home page.
pub async fn home(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    match user {
        Some(user) => HomeTemplate {
            logged_in: true,
            username: user.username,
        },
        None => HomeTemplate {
            logged_in: false,
            username: String::new(),
        },
    }
}

/// Display the user dashboard.
pub async fn dashboard(
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<impl IntoResponse> {
    let won_quiz = session
        .get::<bool>(session_keys::WON_QUIZ)
        .await?
        .unwrap_or(false);

    Ok(DashboardTemplate {
        username: user.username,
        won_quiz,
    })
}

//! Quiz route handlers.
//!
//! The jewelry quiz awards the `WON*` discount coupons: a score of 12 or
//! more sets a session flag the dashboard uses to reveal the codes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session_keys;

/// Minimum score that counts as a quiz win.
const WINNING_SCORE: i32 = 12;

/// Quiz submission form data.
#[derive(Debug, Deserialize)]
pub struct QuizForm {
    #[serde(default)]
    pub score: i32,
}

/// Quiz page template.
#[derive(Template, WebTemplate)]
#[template(path = "quiz/show.html")]
pub struct QuizTemplate {}

/// Display the quiz page.
pub async fn show() -> impl IntoResponse {
    QuizTemplate {}
}

/// Handle quiz submission.
#[instrument(skip_all)]
pub async fn submit(session: Session, Form(form): Form<QuizForm>) -> Result<Response> {
    let won = form.score >= WINNING_SCORE;
    session.insert(session_keys::WON_QUIZ, won).await?;
    tracing::info!(score = form.score, won, "quiz submitted");

    Ok(Redirect::to("/dashboard").into_response())
}

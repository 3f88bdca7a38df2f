//! Login form and submission.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::{start_session, valid_email};
use crate::soglia::{config::ServerConfig, pages, password, storage};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// `GET /login`
pub async fn login_form() -> Html<String> {
    Html(pages::login_page())
}

/// `POST /loginSubmit`
///
/// An unknown email and a wrong password answer the exact same page so the
/// two cases cannot be told apart.
pub async fn login_submit(
    pool: Extension<PgPool>,
    config: Extension<Arc<ServerConfig>>,
    payload: Option<Form<LoginForm>>,
) -> impl IntoResponse {
    let form = match payload {
        Some(Form(form)) => form,
        None => return Redirect::to("/login").into_response(),
    };

    if !valid_email(&form.email) {
        warn!("login rejected by email validation");
        return Redirect::to("/login").into_response();
    }

    // The unique index on email makes this a single-row lookup.
    let user = match storage::lookup_user_by_email(&pool, &form.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!("user not found");
            return Html(pages::invalid_combination_page()).into_response();
        }
        Err(err) => {
            error!("Failed to lookup user: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match password::verify_password(form.password, user.password_hash).await {
        Ok(true) => {}
        Ok(false) => {
            info!("incorrect password");
            return Html(pages::invalid_combination_page()).into_response();
        }
        Err(err) => {
            error!("Failed to verify password: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    start_session(&pool, &config, &user.username).await
}

//! Logout destroys the session row, not just the cookie.

use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;

use crate::soglia::{
    config::ServerConfig,
    session::{clear_session_cookie, extract_session_token, hash_session_token},
    storage,
};

/// `GET /logout`
pub async fn logout(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    config: Extension<Arc<ServerConfig>>,
) -> impl IntoResponse {
    if let Some(token) = extract_session_token(&headers, &config) {
        let token_hash = hash_session_token(&token);
        if let Err(err) = storage::delete_session(&pool, &token_hash).await {
            error!("Failed to delete session: {err}");
        }
    }

    // Always clear the cookie, even if the session row was missing.
    let mut response_headers = HeaderMap::new();
    if let Ok(cookie) = clear_session_cookie() {
        response_headers.insert(SET_COOKIE, cookie);
    }
    (response_headers, Redirect::to("/")).into_response()
}

//! Members area behind the session gate.

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect},
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;

use crate::soglia::{
    config::ServerConfig,
    pages,
    session::{extract_session_token, hash_session_token},
    storage,
};

/// `GET /members`
///
/// Anonymous visitors are sent home; authenticated visits push the session
/// expiry out by a full TTL.
pub async fn members(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    config: Extension<Arc<ServerConfig>>,
) -> impl IntoResponse {
    let Some(token) = extract_session_token(&headers, &config) else {
        return Redirect::to("/").into_response();
    };
    let token_hash = hash_session_token(&token);

    let record = match storage::lookup_session(&pool, &token_hash).await {
        Ok(Some(record)) => record,
        Ok(None) => return Redirect::to("/").into_response(),
        Err(err) => {
            error!("Failed to lookup session: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    // A failed refresh is not fatal; the session simply keeps its old expiry.
    if let Err(err) = storage::touch_session(&pool, &token_hash, config.session_ttl_seconds()).await
    {
        error!("Failed to refresh session expiry: {err}");
    }

    let asset = pages::pick_asset(&mut rand::thread_rng());
    Html(pages::members_page(&record.username, asset)).into_response()
}

//! Home page: welcome for visitors, shortcuts for signed-in users.

use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{Html, IntoResponse},
};
use sqlx::PgPool;
use std::sync::Arc;

use crate::soglia::{config::ServerConfig, pages, session::authenticate_session};

/// `GET /`
pub async fn home(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    config: Extension<Arc<ServerConfig>>,
) -> impl IntoResponse {
    match authenticate_session(&headers, &pool, &config).await {
        Ok(Some(record)) => Html(pages::home_page_authenticated(&record.username)).into_response(),
        Ok(None) => Html(pages::home_page()).into_response(),
        Err(status) => status.into_response(),
    }
}

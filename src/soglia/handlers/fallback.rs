use axum::{http::StatusCode, response::IntoResponse};

use crate::soglia::pages::NOT_FOUND_BODY;

/// Catch-all for every path without a route.
pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

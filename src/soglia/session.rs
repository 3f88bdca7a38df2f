//! Session tokens, signed cookies, and session resolution.
//!
//! The browser holds `token.signature` in an `HttpOnly` cookie; the database
//! stores only SHA-256(token), so a leaked table never yields usable cookies.

use anyhow::{Context, Result};
use axum::http::{header::COOKIE, HeaderMap, HeaderValue, StatusCode};
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tracing::error;

use crate::soglia::{
    config::ServerConfig,
    storage::{self, SessionRecord},
};

pub(crate) const SESSION_COOKIE_NAME: &str = "soglia_session";

type HmacSha256 = Hmac<Sha256>;

/// Create a new session token for the auth cookie.
/// The raw value is only returned to set the cookie; the database stores a hash.
pub(crate) fn generate_session_token() -> Result<String> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("failed to generate session token")?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes))
}

/// Hash a session token so raw values never touch the database.
/// The hash is used for lookups when the cookie is presented.
pub(crate) fn hash_session_token(token: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}

fn sign_token(config: &ServerConfig, token: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(config.session_secret().expose_secret().as_bytes())
        .context("invalid session secret")?;
    mac.update(token.as_bytes());
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}

fn signature_matches(config: &ServerConfig, token: &str, signature: &str) -> bool {
    let Ok(signature) = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(signature) else {
        return false;
    };
    let Ok(mut mac) =
        HmacSha256::new_from_slice(config.session_secret().expose_secret().as_bytes())
    else {
        return false;
    };
    mac.update(token.as_bytes());
    mac.verify_slice(&signature).is_ok()
}

/// Build a secure `HttpOnly` cookie carrying the signed session token.
pub(crate) fn session_cookie(config: &ServerConfig, token: &str) -> Result<HeaderValue> {
    let signature = sign_token(config, token)?;
    let ttl_seconds = config.session_ttl_seconds();
    let cookie = format!(
        "{SESSION_COOKIE_NAME}={token}.{signature}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}"
    );
    HeaderValue::from_str(&cookie).context("invalid session cookie value")
}

pub(crate) fn clear_session_cookie() -> Result<HeaderValue> {
    let cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    HeaderValue::from_str(&cookie).context("invalid session cookie value")
}

/// Pull the raw session token out of the cookie header.
///
/// A missing cookie, an unsigned value, or a bad signature all count as no
/// session; tampered cookies are indistinguishable from absent ones.
pub(crate) fn extract_session_token(headers: &HeaderMap, config: &ServerConfig) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        // A pair without '=' is not ours to reject; keep scanning.
        let Some((key, val)) = pair.trim().split_once('=') else {
            continue;
        };
        let key = key.trim();
        let val = val.trim();
        if key == SESSION_COOKIE_NAME {
            let (token, signature) = val.rsplit_once('.')?;
            if signature_matches(config, token, signature) {
                return Some(token.to_string());
            }
            return None;
        }
    }
    None
}

/// Resolve the session cookie into a live session record, if any.
///
/// Returns `Ok(None)` when the cookie is missing, tampered, or expired.
pub(crate) async fn authenticate_session(
    headers: &HeaderMap,
    pool: &PgPool,
    config: &ServerConfig,
) -> Result<Option<SessionRecord>, StatusCode> {
    let Some(token) = extract_session_token(headers, config) else {
        return Ok(None);
    };
    let token_hash = hash_session_token(&token);
    match storage::lookup_session(pool, &token_hash).await {
        Ok(record) => Ok(record),
        Err(err) => {
            error!("Failed to lookup session: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

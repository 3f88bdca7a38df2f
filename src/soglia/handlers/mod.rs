//! Route handlers and the shared helpers they lean on.

pub mod fallback;
pub use self::fallback::fallback;

pub mod health;
pub use self::health::health;

pub mod home;
pub use self::home::home;

pub mod login;
pub use self::login::{login_form, login_submit};

pub mod logout;
pub use self::logout::logout;

pub mod members;
pub use self::members::members;

pub mod signup;
pub use self::signup::{signup_form, signup_submit};

// common functions for the handlers
use axum::{
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use regex::Regex;
use sqlx::PgPool;
use tracing::error;

use crate::soglia::{config::ServerConfig, session, storage};

const USERNAME_MAX_LENGTH: usize = 20;
const EMAIL_MAX_LENGTH: usize = 50;
const PASSWORD_MAX_LENGTH: usize = 20;

/// Usernames are plain alphanumerics, at most 20 characters.
pub(crate) fn valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= USERNAME_MAX_LENGTH
        && username.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Lightweight email sanity check used before touching the store.
pub(crate) fn valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LENGTH
        && Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Passwords are free-form but capped at 20 characters.
pub(crate) fn valid_password(password: &str) -> bool {
    !password.is_empty() && password.len() <= PASSWORD_MAX_LENGTH
}

/// Create an authenticated session for `username`, set the signed cookie, and
/// redirect to the members area. Shared by the signup and login flows.
pub(crate) async fn start_session(
    pool: &PgPool,
    config: &ServerConfig,
    username: &str,
) -> Response {
    let token = match storage::insert_session(pool, username, config.session_ttl_seconds()).await {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to create session: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let cookie = match session::session_cookie(config, &token) {
        Ok(cookie) => cookie,
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    (headers, Redirect::to("/members")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username_accepts_alphanumerics() {
        assert!(valid_username("alice"));
        assert!(valid_username("Alice99"));
        assert!(valid_username(&"a".repeat(20)));
    }

    #[test]
    fn valid_username_rejects_bad_shapes() {
        assert!(!valid_username(""));
        assert!(!valid_username("alice smith"));
        assert!(!valid_username("alice@home"));
        assert!(!valid_username(&"a".repeat(21)));
    }

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("a@x.com"));
        assert!(valid_email("name.surname@example.co"));
    }

    #[test]
    fn valid_email_rejects_missing_parts_and_overlength() {
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("missing-at.example.com"));
        assert!(!valid_email("missing-domain@"));
        let local = "a".repeat(45);
        assert!(!valid_email(&format!("{local}@example.com")));
    }

    #[test]
    fn valid_password_caps_length() {
        assert!(valid_password("pw123"));
        assert!(valid_password(&"p".repeat(20)));
        assert!(!valid_password(""));
        assert!(!valid_password(&"p".repeat(21)));
    }
}

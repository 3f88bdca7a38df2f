//! Database helpers for user and session records.
//!
//! Expected schema: `users (id uuid, username, email UNIQUE, password_hash,
//! created_at)` and `user_sessions (session_hash UNIQUE, authenticated,
//! username, expires_at)`.

use anyhow::{anyhow, Context, Result};
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

use super::session::{generate_session_token, hash_session_token};

/// Outcome when inserting a new user record.
#[derive(Debug)]
pub(crate) enum SignupOutcome {
    Created(Uuid),
    EmailTaken,
}

/// Fields needed to verify a login attempt.
pub(crate) struct UserRecord {
    pub(crate) username: String,
    pub(crate) password_hash: String,
}

/// Data carried by a valid session row.
pub(crate) struct SessionRecord {
    pub(crate) username: String,
}

/// Insert a new user; the unique index on email turns concurrent signups with
/// the same address into a clean conflict instead of duplicate rows.
pub(crate) async fn insert_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<SignupOutcome> {
    let query = r"
        INSERT INTO users (username, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(span)
        .await;

    match row {
        Ok(row) => Ok(SignupOutcome::Created(row.get("id"))),
        Err(err) if is_unique_violation(&err) => Ok(SignupOutcome::EmailTaken),
        Err(err) => Err(err).context("failed to insert user"),
    }
}

/// Look up login data by email; the unique index guarantees at most one row.
pub(crate) async fn lookup_user_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
    let query = "SELECT username, password_hash FROM users WHERE email = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to lookup user")?;

    Ok(row.map(|row| UserRecord {
        username: row.get("username"),
        password_hash: row.get("password_hash"),
    }))
}

/// Create an authenticated session row and return the raw token so the caller
/// can set the cookie. Retries a few times on the unlikely hash collision.
pub(crate) async fn insert_session(
    pool: &PgPool,
    username: &str,
    ttl_seconds: i64,
) -> Result<String> {
    let query = r"
        INSERT INTO user_sessions (session_hash, authenticated, username, expires_at)
        VALUES ($1, true, $2, NOW() + ($3 * INTERVAL '1 second'))
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );

    for _ in 0..3 {
        let token = generate_session_token()?;
        let token_hash = hash_session_token(&token);
        let result = sqlx::query(query)
            .bind(token_hash)
            .bind(username)
            .bind(ttl_seconds)
            .execute(pool)
            .instrument(span.clone())
            .await;

        match result {
            Ok(_) => return Ok(token),
            Err(err) if is_unique_violation(&err) => {}
            Err(err) => return Err(err).context("failed to insert session"),
        }
    }

    Err(anyhow!("failed to generate unique session token"))
}

/// Only authenticated, unexpired sessions resolve to a record.
pub(crate) async fn lookup_session(
    pool: &PgPool,
    token_hash: &[u8],
) -> Result<Option<SessionRecord>> {
    let query = r"
        SELECT username
        FROM user_sessions
        WHERE session_hash = $1
          AND authenticated
          AND expires_at > NOW()
        LIMIT 1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(token_hash)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to lookup session")?;

    Ok(row.map(|row| SessionRecord {
        username: row.get("username"),
    }))
}

/// Push the session expiry out by a full TTL. Expired or missing rows are
/// left alone; the caller already treats them as anonymous.
pub(crate) async fn touch_session(pool: &PgPool, token_hash: &[u8], ttl_seconds: i64) -> Result<()> {
    let query = r"
        UPDATE user_sessions
        SET expires_at = NOW() + ($2 * INTERVAL '1 second')
        WHERE session_hash = $1
          AND expires_at > NOW()
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "UPDATE",
        db.statement = query
    );
    sqlx::query(query)
        .bind(token_hash)
        .bind(ttl_seconds)
        .execute(pool)
        .instrument(span)
        .await
        .context("failed to refresh session expiry")?;
    Ok(())
}

pub(crate) async fn delete_session(pool: &PgPool, token_hash: &[u8]) -> Result<()> {
    // Logout is idempotent; it's fine if no rows are deleted.
    let query = "DELETE FROM user_sessions WHERE session_hash = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "DELETE",
        db.statement = query
    );
    sqlx::query(query)
        .bind(token_hash)
        .execute(pool)
        .instrument(span)
        .await
        .context("failed to delete session")?;
    Ok(())
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[test]
    fn signup_outcome_debug_names() {
        assert_eq!(
            format!("{:?}", SignupOutcome::Created(Uuid::nil())),
            format!("Created({})", Uuid::nil())
        );
        assert_eq!(format!("{:?}", SignupOutcome::EmailTaken), "EmailTaken");
    }

    #[test]
    fn user_record_holds_values() {
        let record = UserRecord {
            username: "alice".to_string(),
            password_hash: "$2b$12$hash".to_string(),
        };
        assert_eq!(record.username, "alice");
        assert_eq!(record.password_hash, "$2b$12$hash");
    }

    #[derive(Debug)]
    struct TestDbError {
        code: Option<&'static str>,
    }

    impl fmt::Display for TestDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "test database error")
        }
    }

    impl StdError for TestDbError {}

    impl DatabaseError for TestDbError {
        fn message(&self) -> &'static str {
            "test database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn is_unique_violation_matches_sqlstate() {
        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("23505"),
        }));
        assert!(is_unique_violation(&err));

        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("99999"),
        }));
        assert!(!is_unique_violation(&err));

        let err = sqlx::Error::RowNotFound;
        assert!(!is_unique_violation(&err));
    }
}

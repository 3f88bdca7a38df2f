//! Password hashing with a configurable bcrypt cost factor.

use anyhow::{Context, Result};

/// Hash a password on the blocking pool; bcrypt at the configured cost is too
/// slow to run on the async reactor.
pub(crate) async fn hash_password(password: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .context("password hashing task aborted")?
        .context("failed to hash password")
}

/// Verify a password against a stored bcrypt hash.
pub(crate) async fn verify_password(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("password verify task aborted")?
        .context("failed to verify password")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast.
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn hash_then_verify_round_trip() {
        let hash = hash_password("pw123".to_string(), TEST_COST).await.unwrap();
        assert!(verify_password("pw123".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_password() {
        let hash = hash_password("pw123".to_string(), TEST_COST).await.unwrap();
        assert!(!verify_password("nope".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let first = hash_password("pw123".to_string(), TEST_COST).await.unwrap();
        let second = hash_password("pw123".to_string(), TEST_COST).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn verify_errors_on_malformed_hash() {
        let result = verify_password("pw123".to_string(), "not-a-hash".to_string()).await;
        assert!(result.is_err());
    }
}

//! # Soglia (Members-Area Web Application)
//!
//! `soglia` is a small authenticated web application: visitors register an
//! account, log in, and view a members-only page.
//!
//! ## Sessions
//!
//! Session tokens are random 256-bit values. The browser holds a signed
//! `token.signature` cookie and the database stores only the SHA-256 hash of
//! the token, so raw tokens never touch persistent storage. Logging out
//! deletes the session row; an orphaned cookie is treated as anonymous.
//!
//! ## Authentication
//!
//! Passwords are hashed with bcrypt at a configurable cost factor. An unknown
//! email and a wrong password answer the same generic page, so the two cases
//! cannot be told apart from the outside.

pub mod cli;
pub mod soglia;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}

//! Server configuration assembled once at startup and passed to the
//! components that need it.

use secrecy::SecretString;

const DEFAULT_SESSION_TTL_SECONDS: i64 = 60 * 60;
const DEFAULT_HASH_COST: u32 = 12;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    session_secret: SecretString,
    session_ttl_seconds: i64,
    hash_cost: u32,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session_secret: SecretString) -> Self {
        Self {
            session_secret,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    #[must_use]
    pub fn session_secret(&self) -> &SecretString {
        &self.session_secret
    }

    #[must_use]
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    #[must_use]
    pub fn hash_cost(&self) -> u32 {
        self.hash_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_match_one_hour_and_cost_twelve() {
        let config = ServerConfig::new(SecretString::from("secret".to_string()));
        assert_eq!(config.session_ttl_seconds(), 3600);
        assert_eq!(config.hash_cost(), 12);
        assert_eq!(config.session_secret().expose_secret(), "secret");
    }

    #[test]
    fn builders_override_defaults() {
        let config = ServerConfig::new(SecretString::from("secret".to_string()))
            .with_session_ttl_seconds(60)
            .with_hash_cost(4);
        assert_eq!(config.session_ttl_seconds(), 60);
        assert_eq!(config.hash_cost(), 4);
    }
}

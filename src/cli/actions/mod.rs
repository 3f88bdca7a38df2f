pub mod server;

use secrecy::SecretString;

/// Actions the CLI can dispatch.
#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        dsn: String,
        session_secret: SecretString,
        session_ttl_seconds: i64,
        hash_cost: u32,
    },
}

use crate::cli::actions::Action;
use crate::soglia::{self, config::ServerConfig};
use anyhow::{Context, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            session_secret,
            session_ttl_seconds,
            hash_cost,
        } => {
            // Fail fast on malformed connection strings before touching the pool.
            Url::parse(&dsn).context("invalid database connection string")?;

            let config = ServerConfig::new(session_secret)
                .with_session_ttl_seconds(session_ttl_seconds)
                .with_hash_cost(hash_cost);

            soglia::new(port, dsn, config).await?;
        }
    }

    Ok(())
}

//! Command-line flags and database-location resolution.

use std::env;
use std::io;
use std::net::SocketAddr;

use clap::Parser;

/// Database file used when neither `--database-url` nor `DATABASE_URL` is set.
const DEFAULT_DATABASE_URL: &str = "messages.db";

/// `backend` server arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "backend",
    about = "Message board HTTP server with SQLite-backed storage",
    version
)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    #[arg(
        long = "bind-addr",
        value_name = "addr",
        default_value = "0.0.0.0:8080"
    )]
    pub(crate) bind_addr: SocketAddr,
    /// SQLite database path. Falls back to `DATABASE_URL`, then `messages.db`.
    #[arg(long = "database-url", value_name = "path")]
    pub(crate) database_url: Option<String>,
}

impl ServerConfig {
    /// Resolve the database location from the flag, the environment, or the
    /// built-in default.
    pub(crate) fn resolve_database_url(&self) -> io::Result<String> {
        if let Some(value) = &self.database_url {
            if value.trim().is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "--database-url was provided but is empty",
                ));
            }
            return Ok(value.clone());
        }

        match env::var("DATABASE_URL") {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            Ok(_) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "DATABASE_URL is set but empty",
            )),
            Err(_) => Ok(DEFAULT_DATABASE_URL.to_owned()),
        }
    }
}

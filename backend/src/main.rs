//! Backend entry-point: wires REST endpoints, storage, and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use clap::Parser;
use mockable::DefaultClock;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::{CredentialStore, MessageService};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{DbPool, DieselMessageStore, PoolConfig};
use server::ServerConfig;

/// Process entry point: parse flags, open storage, start the listener.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing subscriber not installed");
    }

    let config = ServerConfig::try_parse().map_err(std::io::Error::other)?;
    let database_url = config.resolve_database_url()?;

    let pool = DbPool::new(PoolConfig::new(&database_url)).map_err(std::io::Error::other)?;
    pool.run_migrations().map_err(std::io::Error::other)?;

    let messages = MessageService::new(
        Arc::new(DieselMessageStore::new(pool)),
        Arc::new(DefaultClock),
    );
    let http_state = HttpState::new(Arc::new(CredentialStore::default()), messages);

    let health_state = web::Data::new(HealthState::new());
    let bind_addr = config.bind_addr;
    let server = server::create_server(health_state, http_state, &config)?;
    info!(%bind_addr, database = %database_url, "message board server listening");
    server.await
}

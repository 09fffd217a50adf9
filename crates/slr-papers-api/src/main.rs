//! SLR Papers API - Entry Point

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use slr_papers_api::{config::Config, server::ApiServer, store::PostgresStore};

#[derive(Parser, Debug)]
#[command(name = "slr-papers-api")]
#[command(about = "HTTP API over curated biomedical papers")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "API_HOST")]
    host: IpAddr,

    /// HTTP server port
    #[arg(long, default_value = "8000", env = "API_PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting SLR papers API");

    let config = Config::from_env()?;
    tracing::info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.database,
        table = %config.database.table,
        "Using Postgres store"
    );

    let store = PostgresStore::new(&config.database)?;
    let server = ApiServer::new(Arc::new(store));

    server.run_http(SocketAddr::new(cli.host, cli.port)).await
}

//! Poker table tracker server.
//!
//! Mirrors one poker table for the spectator UI. The roster is pulled from
//! the distributor service; cards are entered through the HTTP API.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Error};
use pico_args::Arguments;
use poker_tracker::{
    TableManager,
    roster::{DistributorClient, RosterSource},
};
use pt_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging, metrics,
};
use tracing::info;

const HELP: &str = "\
Run the poker table tracker server

USAGE:
  pt_server [OPTIONS]

OPTIONS:
  --bind         IP:PORT   Server socket bind address  [default: env SERVER_BIND or 0.0.0.0:5001]
  --distributor  URL       Distributor base URL        [default: env DISTRIBUTOR_URL or http://127.0.0.1:5000]
  --static-dir   PATH      Tracker UI directory        [default: env STATIC_DIR or static]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:5001)
  DISTRIBUTOR_URL          Distributor base URL
  DISTRIBUTOR_TIMEOUT_SECS Roster fetch timeout in seconds (default: 5)
  ROSTER_POLICY            degrade | fail (default: degrade)
  STATIC_DIR               Tracker UI directory
  METRICS_BIND             Prometheus exporter address (disabled when unset)
  RUST_LOG                 Log filter (default: info)
";

struct Args {
    bind: Option<SocketAddr>,
    distributor: Option<String>,
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        distributor: pargs.opt_value_from_str("--distributor")?,
        static_dir: pargs.opt_value_from_str("--static-dir")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.distributor, args.static_dir)?;
    config.validate()?;

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(|e| anyhow::anyhow!(e))?;
        info!("Prometheus metrics exported on {}", addr);
    }

    let client = DistributorClient::new(config.distributor.clone())
        .context("Failed to build distributor client")?;
    info!(
        "Distributor at {} (timeout {}s, policy {})",
        client.endpoint(),
        config.distributor.timeout_secs,
        config.roster_policy
    );

    let roster: Arc<dyn RosterSource> = Arc::new(client);
    let state = AppState {
        table_manager: Arc::new(TableManager::new(roster, config.roster_policy)),
    };

    if !config.static_dir.join(api::INDEX_FILE).is_file() {
        tracing::warn!(
            "{} not found in {}, the tracker UI will return 404",
            api::INDEX_FILE,
            config.static_dir.display()
        );
    }

    let app = api::create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}

//! Serve subcommand handler

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use folio::cli::ServeArgs;
use folio::server::{start_server, AppState};
use folio::{Config, PortfolioStore};

/// Run the HTTP server until interrupted.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: ServeArgs) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load()?;
    apply_overrides(&mut config, &args);
    let address = config.socket_addr()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = option_env!("VERGEN_GIT_SHA").unwrap_or("release"),
        "Starting folio"
    );

    info!("Initializing state...");
    let store = PortfolioStore::load(config.server.data_path.as_deref());
    let state = AppState::new(store);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(start_server(address, state))
}

/// CLI flags win over the config file.
fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data) = &args.data {
        config.server.data_path = Some(data.clone());
    }
}

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use comic_relay::config::{load_config, RelayConfig};
use comic_relay::lifecycle::{signals, Shutdown};
use comic_relay::observability::logging;
use comic_relay::HttpServer;

#[derive(Parser)]
#[command(name = "comic-relay")]
#[command(about = "CORS-bypassing relay for comic source APIs", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply without one.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mount_prefix = %config.relay.mount_prefix,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::trigger_on_ctrl_c(shutdown));

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

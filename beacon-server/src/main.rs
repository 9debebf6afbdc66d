use anyhow::Result;
use beacon_server::{AppState, serve};
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "beacon-server", about = "WebSocket signaling relay")]
struct Args {
    /// Address the relay listens on.
    #[arg(long, env = "BEACON_BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let state = AppState::new();

    serve(args.bind, state).await?;
    Ok(())
}

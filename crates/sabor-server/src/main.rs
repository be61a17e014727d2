//! Sabor Express API server binary.

use clap::Parser;
use sabor_server::{init_tracing, serve, Args, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    serve(ServerConfig::from(&args)).await
}

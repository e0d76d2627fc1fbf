//! Peerboard Server Entry Point

use clap::Parser;
use peerboard::cli::Cli;
use peerboard::config::ServerConfig;
use peerboard::{bootstrap, logging, server};
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse CLI (only -h/--help and -V/--version)
    let _cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    let config = ServerConfig::from_env();
    let state = bootstrap::initialize();

    if let Err(e) = server::run(state, &config.bind_addr()).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

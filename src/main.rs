// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use ai_tools_server::{api::start_server, bootstrap::load_state, config::ServerConfig, version};
use anyhow::Result;
use clap::Parser;
use std::env;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = ServerConfig::parse();
    info!("Starting {}", version::get_version_string());

    let state = match load_state(&config).await {
        Ok(state) => state,
        Err(e) => {
            error!("Startup failed: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("All models loaded");

    start_server(config.socket_addr(), state, config.max_upload_bytes).await
}

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod models;
mod services;
mod utils;
mod view;

use config::Config;
use services::batch_service::BatchPanel;
use services::shell_service;
use view::TerminalView;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ohmy7702=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("⚡ Starting Ohmy7702 demo...");
    info!("   ____  _   _ __  ____   __ ______ ______ ___ ___  ");
    info!("  / __ \\| | | |  \\/  \\ \\ / /|____  |____  / _ \\__ \\ ");
    info!(" | |  | | |_| | |\\/| |\\ V /     / /    / / | | | ) |");
    info!(" | |__| |  _  | |  | | | |     / /    / /| |_| |/ / ");
    info!("  \\____/|_| |_|_|  |_| |_|    /_/    /_/  \\___/____|");
    info!("  Ohmy7702 - Gasless batching transactions with EIP-7702");
    info!("  All execution is simulated. No chain, no wallet, no gas.");
    info!("");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    let mut panel = BatchPanel::new();
    let mut view = TerminalView::new();
    view.print_block(&shell_service::render_home());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    prompt();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if !commands::handle_line(&line, &mut panel, &mut view, &config).await {
                    break;
                }
                prompt();
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    info!("Session ended. The queue is gone; it was never persisted.");
}

fn prompt() {
    print!("ohmy7702> ");
    let _ = std::io::stdout().flush();
}

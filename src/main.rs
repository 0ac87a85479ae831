use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

mod catalog;
mod cli;
mod client;
mod config;
mod render;
mod util;
mod view;
mod web;

use crate::client::{CatalogBackend, HttpCatalogClient};
use crate::config::{AppConfig, CliArgs, Command};
use crate::util::logging::init_tracing;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Initialize logging
    init_tracing(args.log_json);

    // Load configuration
    let config = match AppConfig::new(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let client = HttpCatalogClient::new(&config.backend)?;
    info!("Using catalog backend at {}", client.base_url());
    let backend: Arc<dyn CatalogBackend> = Arc::new(client);

    let mut stdout = std::io::stdout();

    match args.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_config = config.web.clone();
            let app_state = Arc::new(AppState::new(config, backend)?);

            info!("Starting API Genie on {}:{}", web_config.host, web_config.port);
            match web::run_server(web_config, app_state).await {
                Ok(_) => info!("Server stopped gracefully"),
                Err(e) => {
                    error!("Server error: {}", e);
                    return Err(e.into());
                }
            }
        }
        Command::Search { query, filters } => {
            let query = query.join(" ");
            if let Err(e) = cli::run_search(backend.as_ref(), &query, filters.into(), &mut stdout).await {
                error!("Search failed: {}", e);
                return Err(e);
            }
        }
        Command::Ask { question } => {
            cli::run_ask(backend.as_ref(), &question.join(" "), &mut stdout).await?;
        }
        Command::Repl => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            cli::run_repl(backend.as_ref(), stdin, &mut stdout).await?;
        }
        Command::Health => {
            if let Err(e) = cli::run_health(backend.as_ref(), &mut stdout).await {
                error!("Backend health check failed: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}

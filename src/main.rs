use log::{error, info, warn};

mod config;
mod store;
mod web;

use crate::config::AppConfig;
use crate::store::Store;
use crate::web::server::start_web_server;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    info!("Starting Rallypoint...");

    let config = AppConfig::from_env();
    if config.openai_api_key.is_some() {
        info!("OpenAI API key configured");
    } else {
        warn!("OPENAI_API_KEY is not set; AI-assisted drafting will be unavailable");
    }

    // The schema must exist before the server accepts requests.
    let store = match Store::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open database {}: {}", config.db_path.display(), e);
            std::process::exit(1);
        }
    };
    info!("Database ready at {}", config.db_path.display());

    // Start the web interface
    info!(
        "Starting web interface on http://{}:{}",
        config.host, config.port
    );
    let web_server_handle = tokio::spawn(start_web_server(config, store));

    // Run the system
    info!("Rallypoint is now running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");

    info!("Shutting down Rallypoint...");

    // Graceful shutdown
    // Wait for web server to finish
    match web_server_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Web server error: {}", e),
        Err(e) => error!("Error during web server shutdown: {:?}", e),
    }

    info!("Rallypoint shutdown complete");
}

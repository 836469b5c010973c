//! Application entry point building the Actix-Web server.
use std::env;

use dotenvy::dotenv;

use gpodder_sync::domain::LogLevel;
use gpodder_sync::logging::init_logger;
use gpodder_sync::services::config_loader::ConfigLoader;
use gpodder_sync::{CONFIG_FILE_ENV, run};

#[actix_web::main]
async fn main() {
    // Load environment variables from `.env` in local development.
    dotenv().ok();

    let mut loader = ConfigLoader::new();
    if let Some(path) = env::var(CONFIG_FILE_ENV).ok().filter(|p| !p.is_empty()) {
        loader = loader.with_file(path);
    }

    let server_config = match loader.load() {
        Ok(server_config) => server_config,
        Err(err) => {
            init_logger(LogLevel::Error);
            log::error!("Error loading server config: {}", err);
            std::process::exit(1);
        }
    };

    init_logger(server_config.log_level());
    log::debug!("Resolved server config: {server_config:?}");

    match run(server_config).await {
        Ok(_) => log::info!("Server stopped"),
        Err(err) => {
            log::error!("Error starting server: {}", err);
            std::process::exit(1);
        }
    }
}

use actix_web::{App, HttpServer, middleware::Logger, web};

use crate::models::config::ServerConfig;

pub mod domain;
pub mod dto;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

/// Environment variable naming an explicit YAML configuration file.
pub const CONFIG_FILE_ENV: &str = "GPODDER_CONFIG_FILE";

/// Prepare storage and serve until the server is stopped.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    server_config.ensure_data_dir()?;
    log::info!("Using data directory {}", server_config.data_dir().display());

    let bind_address = (server_config.address().to_string(), server_config.port());
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(server_config.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{ContactWriter, HubSpotRepository};

pub mod controller;
pub mod domain;
pub mod dto;
pub mod forms;

#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    if server_config.crm_credential().is_none() {
        log::warn!("CRM credential is not configured; contact requests will fail");
    }

    let repo = HubSpotRepository::new(&server_config.crm_api_url, server_config.crm_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to build CRM client: {e}")))?;
    let repo: Arc<dyn ContactWriter> = Arc::new(repo);
    let repo = web::Data::from(repo);

    let bind_address = (server_config.address.clone(), server_config.port);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::default_headers())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
            .app_data(repo.clone())
            .app_data(server_config.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}

//! Server mode
//!
//! Opens storage, registers the routes and serves until a shutdown signal.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders, from_fn},
    web,
};
use anyhow::Result;
use tracing::{error, warn};

use crate::api::configure_routes;
use crate::api::middleware::request_timing;
use crate::runtime::lifetime;
use crate::system::signal::wait_for_signal;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let startup = lifetime::startup::prepare_services().await.map_err(|e| {
        error!("Server startup failed: {}", e);
        e
    })?;

    let link_service = startup.link_service.clone();

    let config = crate::config::get_config();
    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let db_for_shutdown = startup.storage.get_db().clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(request_timing))
            .wrap(Compress::default())
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::PayloadConfig::new(64 * 1024))
            .wrap(
                DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .configure(configure_routes)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count)
    .disable_signals();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();
    let handle = server.handle();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = wait_for_signal() => {
            handle.stop(true).await;
            warn!("HTTP server stopped");
        }
    }

    lifetime::shutdown::close_database(db_for_shutdown).await;
    warn!("Graceful shutdown completed");

    Ok(())
}

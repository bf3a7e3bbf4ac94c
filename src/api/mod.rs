pub mod middleware;
pub mod services;

use actix_web::web;

/// Register every route; the catch-all redirect goes last
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().content_type_required(false))
        .configure(services::frontend_routes)
        .configure(services::link_routes)
        .configure(services::redirect_routes);
}

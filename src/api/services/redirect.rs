use std::sync::Arc;

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, trace};

use super::links::error_response;
use crate::services::LinkService;

pub struct RedirectService;

impl RedirectService {
    /// `GET /{small_url}`：301 到目标地址
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let small_url = path.into_inner();
        trace!("Redirect lookup: {}", small_url);

        match service.resolve(&small_url).await {
            Ok(link) => {
                debug!("Redirecting {} -> {}", small_url, link.origin_url);
                HttpResponse::MovedPermanently()
                    .insert_header((header::LOCATION, link.origin_url))
                    .finish()
            }
            Err(e) => {
                debug!("Redirect for {} failed: {}", small_url, e);
                error_response(&e)
            }
        }
    }
}

pub fn redirect_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/{small_url:.+}",
        web::get().to(RedirectService::handle_redirect),
    )
    .route(
        "/{small_url:.+}",
        web::head().to(RedirectService::handle_redirect),
    );
}

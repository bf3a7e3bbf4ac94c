use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{error, trace};

use crate::config::get_config;
use crate::interfaces::admin_page::{AdminListRenderer, ServiceTransport, render_page};
use crate::services::LinkService;

pub struct FrontendService;

impl FrontendService {
    /// Host shown in row labels and links
    fn page_host(req: &HttpRequest) -> String {
        match get_config().admin.public_host.as_deref() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => req.connection_info().host().to_string(),
        }
    }

    /// 管理页面：服务端运行列表渲染后返回 HTML
    pub async fn handle_index(
        req: HttpRequest,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let host = Self::page_host(&req);
        trace!("Rendering admin page for host {}", host);

        let renderer = AdminListRenderer::new(ServiceTransport::new(service.get_ref().clone()));
        let (html, outcome) = render_page(&renderer, &host).await;
        if let Err(e) = outcome {
            // 与浏览器中未捕获异常一致：保留已渲染部分
            error!("Admin list render failed: {}", e);
        }

        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)
    }
}

pub fn frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(FrontendService::handle_index));
}

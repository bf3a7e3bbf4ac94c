//! Link endpoints: `/all`, `/create`, `/edit`, `/delete`
//!
//! Bodies are accepted as JSON or as an HTML form. A form submission gets a
//! `303` back to the admin page; a JSON request gets the result directly.

use std::sync::Arc;

use actix_web::http::header;
use actix_web::{Either, HttpResponse, Responder, web};
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::errors::LinkboardError;
use crate::interfaces::admin_page::all_links_response;
use crate::services::{CreateLinkRequest, LinkService, UpdateLinkRequest};

/// Body of `/create`, `/edit` and `/delete`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkPayload {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub small_url: String,
    #[serde(default)]
    pub origin_url: String,
}

/// 表单中的 id 是字符串，JSON 中可能是数字
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(n)) => Ok(Some(n)),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {}", s))),
    }
}

impl LinkPayload {
    fn require_id(&self) -> Result<i64, LinkboardError> {
        self.id
            .ok_or_else(|| LinkboardError::validation("missing id"))
    }
}

type LinkBody = Either<web::Json<LinkPayload>, web::Form<LinkPayload>>;

/// Unwrap the body, remembering whether it came from a form
fn split_body(body: LinkBody) -> (LinkPayload, bool) {
    match body {
        Either::Left(json) => (json.into_inner(), false),
        Either::Right(form) => (form.into_inner(), true),
    }
}

/// Plain-text error with the mapped status
pub fn error_response(err: &LinkboardError) -> HttpResponse {
    HttpResponse::build(err.http_status())
        .content_type("text/plain; charset=utf-8")
        .body(err.message().to_string())
}

fn back_to_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

pub struct LinkApiService;

impl LinkApiService {
    pub async fn handle_all(service: web::Data<Arc<LinkService>>) -> impl Responder {
        let response = all_links_response(&service).await;
        let status = actix_web::http::StatusCode::from_u16(response.status)
            .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = if response.status == 200 {
            "application/json"
        } else {
            "text/plain; charset=utf-8"
        };

        HttpResponse::build(status)
            .content_type(content_type)
            .body(response.body)
    }

    pub async fn handle_create(
        body: LinkBody,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let (payload, from_form) = split_body(body);
        debug!("create request: {:?}", payload);

        let result = service
            .create(CreateLinkRequest {
                small_url: Some(payload.small_url),
                origin_url: payload.origin_url,
            })
            .await;

        match result {
            Ok(_) if from_form => back_to_index(),
            Ok(link) => HttpResponse::Ok().json(link),
            Err(e) => {
                warn!("create failed: {}", e);
                error_response(&e)
            }
        }
    }

    pub async fn handle_edit(
        body: LinkBody,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let (payload, from_form) = split_body(body);
        debug!("edit request: {:?}", payload);

        let id = match payload.require_id() {
            Ok(id) => id,
            Err(e) => return error_response(&e),
        };

        let result = service
            .update(UpdateLinkRequest {
                id,
                small_url: payload.small_url,
                origin_url: payload.origin_url,
            })
            .await;

        match result {
            Ok(_) if from_form => back_to_index(),
            Ok(link) => HttpResponse::Ok().json(link),
            Err(e) => {
                warn!("edit of link {} failed: {}", id, e);
                error_response(&e)
            }
        }
    }

    pub async fn handle_delete(
        body: LinkBody,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let (payload, from_form) = split_body(body);
        debug!("delete request: {:?}", payload);

        let id = match payload.require_id() {
            Ok(id) => id,
            Err(e) => return error_response(&e),
        };

        match service.delete(id).await {
            Ok(()) if from_form => back_to_index(),
            Ok(()) => HttpResponse::Ok().finish(),
            Err(e) => {
                warn!("delete of link {} failed: {}", id, e);
                error_response(&e)
            }
        }
    }
}

pub fn link_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/all", web::post().to(LinkApiService::handle_all))
        .route("/create", web::post().to(LinkApiService::handle_create))
        .route("/edit", web::post().to(LinkApiService::handle_edit))
        .route("/delete", web::post().to(LinkApiService::handle_delete));
}

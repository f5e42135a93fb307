//! URL 创建接口：表单和 JSON 两种入口

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{info, warn};

use crate::errors::{Result, TagshortError};
use crate::storage::LinkStore;
use crate::utils::{clean_tags, normalize_url, parse_tags, validation_error_message};

use super::error_code::ErrorCode;
use super::helpers::{
    base_url, details_link, details_path, error_from_tagshort, error_response, json_response,
    short_link,
};
use super::types::{CreateUrlRequest, CreatedUrl, NewUrlForm};

pub struct LinkService;

impl LinkService {
    /// `POST /new`，成功后 303 跳到详情页
    pub async fn create_from_form(
        form: web::Form<NewUrlForm>,
        store: web::Data<Arc<LinkStore>>,
    ) -> impl Responder {
        let form = form.into_inner();
        let uri = match normalize_url(&form.url) {
            Ok(uri) => uri,
            Err(e) => {
                warn!("Rejected submitted URL {:?}: {}", form.url, e);
                return error_response(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::LinkInvalidUrl,
                    validation_error_message(&e),
                );
            }
        };
        let tags = parse_tags(form.tags.as_deref().unwrap_or_default());

        match store.add_url(&uri, &tags, None).await {
            Ok(code) => HttpResponse::SeeOther()
                .insert_header(("Location", details_path(&code)))
                .finish(),
            Err(e) => error_from_tagshort(&e),
        }
    }

    /// `POST /api/urls`
    pub async fn create_from_json(
        req: HttpRequest,
        body: web::Json<CreateUrlRequest>,
        store: web::Data<Arc<LinkStore>>,
    ) -> impl Responder {
        let body = body.into_inner();
        let uri = match normalize_url(&body.url) {
            Ok(uri) => uri,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::LinkInvalidUrl,
                    validation_error_message(&e),
                );
            }
        };

        let creator = match resolve_creator(&store, body.creator.as_deref()).await {
            Ok(creator) => creator,
            Err(e) => {
                let code = if matches!(e, TagshortError::Validation(_)) {
                    ErrorCode::LinkUnknownCreator
                } else {
                    ErrorCode::from(&e)
                };
                return error_response(e.http_status(), code, e.message());
            }
        };

        let tags = clean_tags(&body.tags);
        match store.add_url(&uri, &tags, creator).await {
            Ok(code) => {
                info!("Created via API: {} -> {}", code, uri);
                let base = base_url(&req);
                json_response(
                    StatusCode::CREATED,
                    ErrorCode::Success,
                    "Created",
                    Some(CreatedUrl {
                        short_url: short_link(&base, &code),
                        details_url: details_link(&base, &code),
                        code,
                    }),
                )
            }
            Err(e) => error_from_tagshort(&e),
        }
    }
}

/// 名字 → creator id；未知名字是输入错误
async fn resolve_creator(store: &LinkStore, name: Option<&str>) -> Result<Option<i64>> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(None);
    };

    store
        .creator_id(name)
        .await?
        .map(Some)
        .ok_or_else(|| TagshortError::validation(format!("unknown creator: {}", name)))
}

pub fn link_routes() -> actix_web::Scope {
    web::scope("/api").route("/urls", web::post().to(LinkService::create_from_json))
}

/// 表单入口在根路径下，要排在短码路由之前
pub fn new_url_resource() -> actix_web::Resource {
    web::resource("/new").route(web::post().to(LinkService::create_from_form))
}

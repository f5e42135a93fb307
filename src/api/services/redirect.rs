use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, error, trace};

use crate::codec::is_valid_code;
use crate::storage::LinkStore;

use super::helpers::error_from_tagshort;
use super::index::IndexService;

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_redirect(
        path: web::Path<String>,
        store: web::Data<Arc<LinkStore>>,
    ) -> impl Responder {
        let code = path.into_inner();

        if !is_valid_code(&code) {
            // 非法短码直接 404，不查库
            trace!("Invalid code rejected: {}", code);
            return Self::not_found_response();
        }

        match store.get_url(&code).await {
            Ok(Some(uri)) => {
                debug!("Redirecting {} -> {}", code, uri);
                HttpResponse::TemporaryRedirect()
                    .insert_header(("Location", uri))
                    .finish()
            }
            Ok(None) => {
                debug!("Code not found: {}", code);
                Self::not_found_response()
            }
            Err(e) if e.is_not_found() => {
                trace!("Undecodable code {}: {}", code, e);
                Self::not_found_response()
            }
            Err(e) => {
                error!("Store error during redirect lookup: {}", e);
                error_from_tagshort(&e)
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }
}

/// 根路径和短码重定向，必须最后注册
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(IndexService::info))
        .route("/{code}", web::get().to(RedirectService::handle_redirect))
        .route("/{code}", web::head().to(RedirectService::handle_redirect))
}

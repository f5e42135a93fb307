use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, Responder, web};
use tracing::{debug, error};

use crate::storage::{LinkStore, UrlDetails};

use super::error_code::ErrorCode;
use super::helpers::{base_url, error_from_tagshort, error_response, short_link, success_response};
use super::types::UrlDetailsView;

pub struct DetailsService;

impl DetailsService {
    fn view(base: &str, details: UrlDetails) -> UrlDetailsView {
        UrlDetailsView {
            short_url: short_link(base, &details.code),
            details,
        }
    }

    /// `GET /details`，全表，无分页
    pub async fn list(req: HttpRequest, store: web::Data<Arc<LinkStore>>) -> impl Responder {
        match store.list_url_details().await {
            Ok(all) => {
                let base = base_url(&req);
                let views: Vec<UrlDetailsView> =
                    all.into_iter().map(|d| Self::view(&base, d)).collect();
                success_response(views)
            }
            Err(e) => {
                error!("Failed to list URL details: {}", e);
                error_from_tagshort(&e)
            }
        }
    }

    /// `GET /details/{code}`
    pub async fn get(
        req: HttpRequest,
        path: web::Path<String>,
        store: web::Data<Arc<LinkStore>>,
    ) -> impl Responder {
        let code = path.into_inner();

        match store.get_url_details(&code).await {
            Ok(Some(details)) => success_response(Self::view(&base_url(&req), details)),
            Ok(None) => error_response(
                StatusCode::NOT_FOUND,
                ErrorCode::LinkNotFound,
                &format!("No URL for code {}", code),
            ),
            Err(e) => {
                debug!("Details lookup for {} failed: {}", code, e);
                error_from_tagshort(&e)
            }
        }
    }
}

pub fn details_routes() -> actix_web::Scope {
    web::scope("/details")
        .route("", web::get().to(DetailsService::list))
        .route("/{code}", web::get().to(DetailsService::get))
}

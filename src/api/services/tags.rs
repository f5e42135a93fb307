use std::sync::Arc;

use actix_web::{HttpRequest, Responder, web};
use tracing::error;

use crate::storage::LinkStore;

use super::helpers::{base_url, error_from_tagshort, short_link, success_response};
use super::types::{TagCloud, UrlSummaryView};

pub struct TagService;

impl TagService {
    /// `GET /tags`
    pub async fn cloud(store: web::Data<Arc<LinkStore>>) -> impl Responder {
        match store.list_tags().await {
            Ok(tags) => success_response(TagCloud::new(tags)),
            Err(e) => {
                error!("Failed to list tags: {}", e);
                error_from_tagshort(&e)
            }
        }
    }

    /// `GET /tags/{tag}`，大小写敏感，未知标签返回空列表
    pub async fn urls_by_tag(
        req: HttpRequest,
        path: web::Path<String>,
        store: web::Data<Arc<LinkStore>>,
    ) -> impl Responder {
        let tag = path.into_inner();

        match store.list_urls_by_tag(&tag).await {
            Ok(summaries) => {
                let base = base_url(&req);
                let views: Vec<UrlSummaryView> = summaries
                    .into_iter()
                    .map(|summary| UrlSummaryView {
                        short_url: short_link(&base, &summary.code),
                        summary,
                    })
                    .collect();
                success_response(views)
            }
            Err(e) => {
                error!("Failed to list URLs for tag {}: {}", tag, e);
                error_from_tagshort(&e)
            }
        }
    }
}

pub fn tag_routes() -> actix_web::Scope {
    web::scope("/tags")
        .route("", web::get().to(TagService::cloud))
        .route("/{tag}", web::get().to(TagService::urls_by_tag))
}

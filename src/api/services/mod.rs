pub mod details;
pub mod error_code;
pub mod health;
pub mod helpers;
pub mod index;
pub mod links;
pub mod redirect;
pub mod tags;
pub mod types;

pub use details::{DetailsService, details_routes};
pub use error_code::ErrorCode;
pub use health::{AppStartTime, HealthService, health_routes};
pub use index::IndexService;
pub use links::{LinkService, link_routes, new_url_resource};
pub use redirect::{RedirectService, redirect_routes};
pub use tags::{TagService, tag_routes};
pub use types::ApiResponse;

/// 注册全部路由；短码通配路由在最后
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health_routes())
        .service(details_routes())
        .service(tag_routes())
        .service(link_routes())
        .service(new_url_resource())
        .service(redirect_routes());
}

use std::sync::Arc;

use actix_web::{Responder, web};

use crate::storage::LinkStore;

use super::helpers::success_response;
use super::types::ServiceInfo;

pub struct IndexService;

impl IndexService {
    /// `GET /`
    pub async fn info(store: web::Data<Arc<LinkStore>>) -> impl Responder {
        success_response(ServiceInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            backend: store.backend_name().to_string(),
        })
    }
}

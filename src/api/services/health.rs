use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, trace};

use crate::storage::LinkStore;

use super::error_code::ErrorCode;
use super::helpers::json_response;
use super::types::HealthResponse;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Health Service
///
/// 只查 count，不加载全表
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        store: web::Data<Arc<LinkStore>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let (urls_count, err) =
            match tokio::time::timeout(Duration::from_secs(5), store.count_urls()).await {
                Ok(Ok(count)) => {
                    trace!("Storage health check passed, {} URLs stored", count);
                    (Some(count), None)
                }
                Ok(Err(e)) => {
                    error!("Storage health check failed: {}", e);
                    (None, Some(format!("database error: {}", e)))
                }
                Err(_) => {
                    error!("Storage health check timeout");
                    (None, Some("timeout".to_string()))
                }
            };

        let is_healthy = err.is_none();
        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

        let health_data = HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds,
            backend: store.backend_name().to_string(),
            urls_count,
            error: err,
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        info!(
            "Health check completed in {:?}, status: {}, uptime: {}s",
            start_time.elapsed(),
            health_data.status,
            uptime_seconds
        );

        if is_healthy {
            json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(health_data))
        } else {
            json_response(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::ServiceUnavailable,
                "Service Unavailable",
                Some(health_data),
            )
        }
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}

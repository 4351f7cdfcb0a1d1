use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

/// GET / - Banner em texto puro
pub async fn root() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("📚 Collaborative Study Platform Server is running!")
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    let (status, database, code) = match db.ping().await {
        Ok(_) => ("healthy", "connected", StatusCode::OK),
        Err(e) => {
            log::warn!("⚠️  Health check ping failed: {}", e);
            ("degraded", "unreachable", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    HttpResponse::build(code).json(HealthResponse {
        status: status.to_string(),
        service: "learning-hub-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::DocumentStore;

pub const WELCOME: &str = "welcome to my wisdom school";

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    /// "up" when the document store answered a ping
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Static welcome text", body = String)
    )
)]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().body(WELCOME)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<dyn DocumentStore>) -> impl Responder {
    let database = match db.ping().await {
        Ok(()) => "up",
        Err(e) => {
            log::warn!("⚠️  Health check: store unreachable: {}", e);
            "down"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "school-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        database: database.to_string(),
    })
}

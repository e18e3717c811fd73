use actix_web::{web, HttpResponse};

use crate::database::DocumentStore;
use crate::services::catalog_service;
use crate::utils::{document_to_json, documents_to_json, AppError};

#[utoipa::path(
    get,
    path = "/schoolInfo",
    tag = "School",
    responses((status = 200, description = "All school info documents"))
)]
pub async fn get_school_info(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("🏫 GET /schoolInfo");
    let docs = catalog_service::list_school_info(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(docs)))
}

#[utoipa::path(
    get,
    path = "/teachers",
    tag = "School",
    responses((status = 200, description = "All teachers"))
)]
pub async fn get_teachers(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("👩‍🏫 GET /teachers");
    let docs = catalog_service::list_teachers(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(docs)))
}

#[utoipa::path(
    get,
    path = "/classes",
    tag = "School",
    responses((status = 200, description = "All classes"))
)]
pub async fn get_classes(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📚 GET /classes");
    let docs = catalog_service::list_classes(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(docs)))
}

#[utoipa::path(
    get,
    path = "/class/{id}",
    tag = "School",
    params(("id" = String, Path, description = "Class object id (24 hex characters)")),
    responses(
        (status = 200, description = "The class, or null when absent"),
        (status = 500, description = "Malformed id or store fault")
    )
)]
pub async fn get_class(
    db: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("📚 GET /class/{}", id);

    let class = catalog_service::get_class(db.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(class.map(document_to_json)))
}

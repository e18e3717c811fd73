use actix_web::{web, HttpResponse};
use mongodb::bson::Document;

use crate::database::DocumentStore;
use crate::models::{AdminStatus, DeleteResult, InsertOneResult, MessageResponse, UpdateResult};
use crate::services::user_service::{self, CreateUserOutcome};
use crate::services::Claims;
use crate::utils::{documents_to_json, AppError};

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body(content = Object, description = "User document; `email` is the business key"),
    responses(
        (status = 200, description = "Inserted, or already existing", body = InsertOneResult)
    )
)]
pub async fn create_user(
    db: web::Data<dyn DocumentStore>,
    user: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
    let user = user.into_inner();
    log::info!("📝 POST /users - email: {}", user.get_str("email").unwrap_or("N/A"));

    match user_service::create_user(db.get_ref(), user).await? {
        CreateUserOutcome::Created(result) => Ok(HttpResponse::Ok().json(result)),
        CreateUserOutcome::AlreadyExists => {
            Ok(HttpResponse::Ok().json(MessageResponse::new("user already exist")))
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_users(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("👥 GET /users");
    let users = user_service::list_users(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(users)))
}

/// A caller may only ask about their own email; asking about anyone else
/// answers `{ "admin": false }` without a lookup.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Email to check")),
    responses(
        (status = 200, description = "Admin flag", body = AdminStatus),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn check_admin(
    db: web::Data<dyn DocumentStore>,
    claims: web::ReqData<Claims>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("🛡️  GET /users/admin/{}", email);

    if claims.email.as_deref() != Some(email.as_str()) {
        return Ok(HttpResponse::Ok().json(AdminStatus { admin: false }));
    }

    let admin = user_service::is_admin_email(db.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(AdminStatus { admin }))
}

#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User object id")),
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn make_admin(
    db: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("⬆️  PATCH /users/admin/{}", id);

    let result = user_service::promote_to_admin(db.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User object id")),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    db: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /users/{}", id);

    let result = user_service::delete_user(db.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(result))
}

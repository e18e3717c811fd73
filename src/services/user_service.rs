use mongodb::bson::{doc, Bson, Document};

use crate::database::{parse_object_id, DocumentStore, USERS};
use crate::models::{is_admin, DeleteResult, InsertOneResult, UpdateResult, ADMIN_ROLE};
use crate::utils::AppError;

pub enum CreateUserOutcome {
    Created(InsertOneResult),
    AlreadyExists,
}

/// Inserts the user unless one with the same email exists.
///
/// The existence check and the insert are two separate round trips: two
/// concurrent sign-ups with the same email can both succeed.
pub async fn create_user(db: &dyn DocumentStore, user: Document) -> Result<CreateUserOutcome, AppError> {
    let email = user.get("email").cloned().unwrap_or(Bson::Null);

    if db.find_one_by(USERS, "email", email).await?.is_some() {
        return Ok(CreateUserOutcome::AlreadyExists);
    }

    let result = db.insert_one(USERS, user).await?;
    Ok(CreateUserOutcome::Created(result))
}

pub async fn list_users(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find_all(USERS).await
}

pub async fn find_by_email(db: &dyn DocumentStore, email: &str) -> Result<Option<Document>, AppError> {
    db.find_one_by(USERS, "email", Bson::String(email.to_string())).await
}

/// Whether the stored user with this email carries the admin role. Unknown
/// emails are simply not admins.
pub async fn is_admin_email(db: &dyn DocumentStore, email: &str) -> Result<bool, AppError> {
    Ok(find_by_email(db, email).await?.as_ref().is_some_and(is_admin))
}

pub async fn promote_to_admin(db: &dyn DocumentStore, id: &str) -> Result<UpdateResult, AppError> {
    let oid = parse_object_id(id)?;
    db.set_fields_by_id(USERS, oid, doc! { "role": ADMIN_ROLE }).await
}

pub async fn delete_user(db: &dyn DocumentStore, id: &str) -> Result<DeleteResult, AppError> {
    let oid = parse_object_id(id)?;
    db.delete_by_id(USERS, oid).await
}

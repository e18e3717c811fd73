use mongodb::bson::Document;

use crate::database::{parse_object_id, DocumentStore, CLASSES, SCHOOL_INFO, TEACHERS};
use crate::utils::AppError;

// Read-only school catalog: info, teachers and classes

pub async fn list_school_info(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find_all(SCHOOL_INFO).await
}

pub async fn list_teachers(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find_all(TEACHERS).await
}

pub async fn list_classes(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find_all(CLASSES).await
}

/// Class by object id; `None` when absent, error when the id is malformed.
pub async fn get_class(db: &dyn DocumentStore, id: &str) -> Result<Option<Document>, AppError> {
    let oid = parse_object_id(id)?;
    db.find_by_id(CLASSES, oid).await
}

use mongodb::bson::{Bson, Document};

use crate::database::{parse_object_id, DocumentStore, STUDENTS};
use crate::models::{generate_student_id, DeleteResult, InsertOneResult};
use crate::utils::AppError;

pub enum AdmitStudentOutcome {
    Admitted(InsertOneResult),
    AlreadyExists,
}

/// Registers a student under a freshly drawn `studentId`, unless a student
/// with the same email exists. Same non-atomic check-then-insert as users.
pub async fn admit_student(
    db: &dyn DocumentStore,
    mut student: Document,
) -> Result<AdmitStudentOutcome, AppError> {
    student.insert("studentId", generate_student_id());

    let email = student.get("email").cloned().unwrap_or(Bson::Null);
    if db.find_one_by(STUDENTS, "email", email).await?.is_some() {
        return Ok(AdmitStudentOutcome::AlreadyExists);
    }

    let result = db.insert_one(STUDENTS, student).await?;
    Ok(AdmitStudentOutcome::Admitted(result))
}

/// Student by email; a missing email looks up documents without one.
pub async fn find_by_email(
    db: &dyn DocumentStore,
    email: Option<&str>,
) -> Result<Option<Document>, AppError> {
    let value = email.map_or(Bson::Null, |e| Bson::String(e.to_string()));
    db.find_one_by(STUDENTS, "email", value).await
}

pub async fn list_students(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find_all(STUDENTS).await
}

pub async fn delete_student(db: &dyn DocumentStore, id: &str) -> Result<DeleteResult, AppError> {
    let oid = parse_object_id(id)?;
    db.delete_by_id(STUDENTS, oid).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use crate::models::{STUDENT_ID_MAX, STUDENT_ID_MIN};
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_admit_assigns_student_id() {
        let db = MemoryStore::new();
        let outcome = admit_student(&db, doc! { "email": "s@x.com", "class": "5A" }).await.unwrap();
        assert!(matches!(outcome, AdmitStudentOutcome::Admitted(_)));

        let stored = find_by_email(&db, Some("s@x.com")).await.unwrap().unwrap();
        let student_id = stored.get_i32("studentId").unwrap();
        assert!((STUDENT_ID_MIN..=STUDENT_ID_MAX).contains(&student_id));
        assert_eq!(stored.get_str("class").unwrap(), "5A");
    }

    #[tokio::test]
    async fn test_admit_once_per_email() {
        let db = MemoryStore::new();
        admit_student(&db, doc! { "email": "s@x.com" }).await.unwrap();
        let again = admit_student(&db, doc! { "email": "s@x.com" }).await.unwrap();
        assert!(matches!(again, AdmitStudentOutcome::AlreadyExists));
        assert_eq!(db.count(STUDENTS).await, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_student_reports_zero() {
        let db = MemoryStore::new();
        let result = delete_student(&db, &mongodb::bson::oid::ObjectId::new().to_hex())
            .await
            .unwrap();
        assert_eq!(result.deleted_count, 0);
    }
}

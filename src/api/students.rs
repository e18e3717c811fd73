use actix_web::{web, HttpResponse};
use mongodb::bson::Document;
use serde::Deserialize;

use crate::database::DocumentStore;
use crate::models::{DeleteResult, InsertOneResult, MessageResponse};
use crate::services::student_service::{self, AdmitStudentOutcome};
use crate::utils::{document_to_json, documents_to_json, AppError};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentQuery {
    pub email: Option<String>,
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body(content = Object, description = "Admission form; `email` is the business key"),
    responses(
        (status = 200, description = "Inserted with a random studentId, or already existing", body = InsertOneResult)
    )
)]
pub async fn admit_student(
    db: web::Data<dyn DocumentStore>,
    student: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
    let student = student.into_inner();
    log::info!("🎒 POST /students - email: {}", student.get_str("email").unwrap_or("N/A"));

    match student_service::admit_student(db.get_ref(), student).await? {
        AdmitStudentOutcome::Admitted(result) => Ok(HttpResponse::Ok().json(result)),
        AdmitStudentOutcome::AlreadyExists => {
            Ok(HttpResponse::Ok().json(MessageResponse::new("this student already exist")))
        }
    }
}

#[utoipa::path(
    get,
    path = "/student",
    tag = "Students",
    params(StudentQuery),
    responses(
        (status = 200, description = "The student, or null when absent"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_student(
    db: web::Data<dyn DocumentStore>,
    query: web::Query<StudentQuery>,
) -> Result<HttpResponse, AppError> {
    let email = query.into_inner().email;
    log::info!("🎒 GET /student - email: {}", email.as_deref().unwrap_or("N/A"));

    let student = student_service::find_by_email(db.get_ref(), email.as_deref()).await?;
    Ok(HttpResponse::Ok().json(student.map(document_to_json)))
}

#[utoipa::path(
    get,
    path = "/all-students",
    tag = "Students",
    responses(
        (status = 200, description = "All students"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_students(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("🎒 GET /all-students");
    let students = student_service::list_students(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(students)))
}

#[utoipa::path(
    delete,
    path = "/student/{id}",
    tag = "Students",
    params(("id" = String, Path, description = "Student object id")),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_student(
    db: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /student/{}", id);

    let result = student_service::delete_student(db.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(result))
}

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Service API",
        version = "1.0.0",
        description = "Backend for the school web app: school info, teachers, classes, users and student admission.\n\n**Authentication:** obtain a token from `POST /jwt` and send it as `Authorization: Bearer <token>`. Admin routes also require the caller's user record to have `role: \"admin\"`."
    ),
    paths(
        // Health
        crate::api::health::welcome,
        crate::api::health::health_check,

        // Auth
        crate::api::auth::issue_token,

        // School catalog
        crate::api::school::get_school_info,
        crate::api::school::get_teachers,
        crate::api::school::get_classes,
        crate::api::school::get_class,

        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::check_admin,
        crate::api::users::make_admin,
        crate::api::users::delete_user,

        // Students
        crate::api::students::admit_student,
        crate::api::students::get_student,
        crate::api::students::list_students,
        crate::api::students::delete_student,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::auth::TokenResponse,
            crate::models::AdminStatus,
            crate::models::MessageResponse,
            crate::models::InsertOneResult,
            crate::models::UpdateResult,
            crate::models::DeleteResult,
        )
    ),
    tags(
        (name = "Health", description = "Welcome text and service health."),
        (name = "Auth", description = "Bearer token issuance."),
        (name = "School", description = "Read-only school catalog: info, teachers and classes."),
        (name = "Users", description = "User registration and admin role management."),
        (name = "Students", description = "Student admission and records."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /jwt"))
                        .build(),
                ),
            );
        }
    }
}

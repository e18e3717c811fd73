pub mod auth;
pub mod health;
pub mod school;
pub mod students;
pub mod swagger;
pub mod users;

use actix_web::{guard, web};

use crate::middleware::{AdminGuard, AuthGuard};

/// Registers every route. Expects `web::Data<dyn DocumentStore>` and
/// `web::Data<TokenService>` as app data.
///
/// Guards are attached per resource; the last `wrap` runs first, so
/// `AuthGuard` is always outermost.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::welcome))
        .route("/health", web::get().to(health::health_check))
        // Auth
        .route("/jwt", web::post().to(auth::issue_token))
        // School catalog (public)
        .route("/schoolInfo", web::get().to(school::get_school_info))
        .route("/teachers", web::get().to(school::get_teachers))
        .route("/classes", web::get().to(school::get_classes))
        .route("/class/{id}", web::get().to(school::get_class))
        // Users
        .service(
            web::resource("/users")
                .guard(guard::Post())
                .route(web::post().to(users::create_user)),
        )
        .service(
            web::resource("/users")
                .guard(guard::Get())
                .wrap(AdminGuard)
                .wrap(AuthGuard)
                .route(web::get().to(users::list_users)),
        )
        .service(
            web::resource("/users/admin/{email}")
                .guard(guard::Get())
                .wrap(AuthGuard)
                .route(web::get().to(users::check_admin)),
        )
        .service(
            web::resource("/users/admin/{id}")
                .guard(guard::Patch())
                .wrap(AdminGuard)
                .wrap(AuthGuard)
                .route(web::patch().to(users::make_admin)),
        )
        .service(
            web::resource("/users/{id}")
                .guard(guard::Delete())
                .wrap(AdminGuard)
                .wrap(AuthGuard)
                .route(web::delete().to(users::delete_user)),
        )
        // Students
        .route("/students", web::post().to(students::admit_student))
        .service(
            web::resource("/student")
                .wrap(AuthGuard)
                .route(web::get().to(students::get_student)),
        )
        .service(
            web::resource("/all-students")
                .wrap(AdminGuard)
                .wrap(AuthGuard)
                .route(web::get().to(students::list_students)),
        )
        .service(
            web::resource("/student/{id}")
                .wrap(AdminGuard)
                .wrap(AuthGuard)
                .route(web::delete().to(students::delete_student)),
        );
}

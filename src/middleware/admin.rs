use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::database::DocumentStore;
use crate::services::{user_service, Claims};
use crate::utils::AppError;

/// Lets the request through only when the stored user matching the token's
/// email has the admin role. Must run after [`super::AuthGuard`].
///
/// The role is read from the store on every request.
pub struct AdminGuard;

impl<S, B> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGuardService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authorize(&req).await {
                Ok(()) => service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body),
                Err(e) => {
                    log::warn!("⛔ {} {} rejected: {}", req.method(), req.path(), e);
                    Ok(req.error_response(e).map_into_right_body())
                }
            }
        })
    }
}

async fn authorize(req: &ServiceRequest) -> Result<(), AppError> {
    let email = req
        .extensions()
        .get::<Claims>()
        .map(|claims| claims.email.clone())
        .ok_or(AppError::Unauthorized)?;

    let db = req
        .app_data::<web::Data<dyn DocumentStore>>()
        .cloned()
        .ok_or_else(|| AppError::Config("document store not registered".into()))?;

    let allowed = match email.as_deref() {
        Some(email) => user_service::is_admin_email(db.get_ref(), email).await?,
        None => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

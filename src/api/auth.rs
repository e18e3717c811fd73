use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::services::TokenService;
use crate::utils::AppError;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Signs whatever identity object the client posts (normally `{ "email": ... }`)
/// into a one hour bearer token.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    request_body(content = Object, description = "Claims to sign; should contain `email`"),
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 400, description = "Body is not a JSON object")
    )
)]
pub async fn issue_token(
    tokens: web::Data<TokenService>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    log::info!(
        "🔐 POST /jwt - email: {}",
        payload.get("email").and_then(Value::as_str).unwrap_or("N/A")
    );

    let token = tokens.issue(payload)?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

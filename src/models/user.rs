use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

/// Role marker read off a stored user document. Users are otherwise kept as
/// opaque documents; only `email` and `role` carry meaning here.
pub fn is_admin(user: &Document) -> bool {
    matches!(user.get_str("role"), Ok(role) if role == ADMIN_ROLE)
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

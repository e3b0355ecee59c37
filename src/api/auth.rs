//! Authentication status endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use super::MaybeUser;
use crate::models::auth::AuthStatus;

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Report whether the caller presented a valid bearer token
#[utoipa::path(
    get,
    path = "/auth/user",
    tag = "auth",
    responses(
        (status = 200, description = "Authentication status", body = AuthStatus)
    )
)]
pub async fn current_user(MaybeUser(claims): MaybeUser) -> Json<AuthStatus> {
    Json(AuthStatus::from(claims))
}

/// Login is handled by the identity provider
#[utoipa::path(
    get,
    path = "/auth/login",
    tag = "auth",
    responses(
        (status = 200, description = "Login hint", body = MessageResponse)
    )
)]
pub async fn login_hint() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Please use POST to login".to_string(),
    })
}

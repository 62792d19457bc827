// POST /auth/login - authenticate and receive a bearer token

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth;
use crate::config;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub expires_in: u64,
}

/// Authenticate a user and issue a signed bearer token.
///
/// Unknown email and wrong password both answer 401 with the same message,
/// so the endpoint is not an account-existence oracle.
pub async fn user_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let user = state
        .store
        .find_user_by_email(&payload.email)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("Invalid credentials"))?;

    if !auth::verify_password(&payload.password, &user.password_hash) {
        return Err(ApiError::unauthenticated("Invalid credentials"));
    }

    let security = &config::config().security;
    let token = auth::issue_token(user.id, &user.email, security).map_err(|e| {
        tracing::error!("token issuance failed: {}", e);
        ApiError::internal("An error occurred while processing your request")
    })?;

    Ok(ApiResponse::success(LoginResponse {
        token,
        user_id: user.id,
        expires_in: security.jwt_expiry_hours * 3600,
    }))
}

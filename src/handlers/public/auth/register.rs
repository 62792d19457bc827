// POST /auth/register - create a new user account

use axum::extract::{Json, State};
use serde::Deserialize;

use crate::auth;
use crate::config;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::store::{User, UserView};
use crate::validation;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Register a new account. Validation runs first and reports every
/// violation at once; a taken email is a conflict; the password is stored
/// only as a bcrypt digest.
pub async fn user_register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<UserView> {
    let violations = validation::validate_registration(&payload.email, &payload.password);
    if !violations.is_empty() {
        return Err(ApiError::invalid_input("Invalid input", violations));
    }

    if state
        .store
        .find_user_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("User exists already"));
    }

    let cost = config::config().security.bcrypt_cost;
    let password_hash = auth::hash_password(&payload.password, cost).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        ApiError::internal("An error occurred while processing your request")
    })?;

    let user = User::new(payload.email, password_hash, payload.name);
    state.store.save_user(user.clone()).await?;

    tracing::info!(user_id = %user.id, "registered new user");
    Ok(ApiResponse::created(user.public_view()))
}

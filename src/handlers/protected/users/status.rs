// PUT /api/users/status - update the caller's own status line

use axum::extract::{Extension, Json, State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, RequestIdentity};
use crate::store::UserView;
use crate::validation;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

pub async fn status_put(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(payload): Json<StatusRequest>,
) -> ApiResult<UserView> {
    let caller = identity.require()?;

    let violations = validation::validate_status(&payload.status);
    if !violations.is_empty() {
        return Err(ApiError::invalid_input("Invalid input", violations));
    }

    let mut user = state
        .store
        .find_user_by_email(&caller.email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    user.status = payload.status;
    state.store.update_user(user.clone()).await?;

    Ok(ApiResponse::success(user.public_view()))
}

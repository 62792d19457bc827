// GET /api/auth/whoami - current user's own record

use axum::extract::{Extension, State};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, RequestIdentity};
use crate::store::UserView;
use crate::AppState;

/// Return the caller's own user record, without the password digest.
pub async fn user_whoami(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> ApiResult<UserView> {
    let caller = identity.require()?;

    let user = state
        .store
        .find_user_by_email(&caller.email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(user.public_view()))
}

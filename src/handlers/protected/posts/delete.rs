// DELETE /api/posts/:id - delete a post the caller owns

use axum::extract::{Extension, Path, State};
use uuid::Uuid;

use super::require_owner;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, RequestIdentity};
use crate::store::Post;
use crate::AppState;

/// Delete an owned post. The store removes the record and detaches it from
/// the owner's post list in one write.
pub async fn post_delete(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(id): Path<Uuid>,
) -> ApiResult<Post> {
    let caller = identity.require()?;

    let post = state
        .store
        .find_post_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("No post found"))?;
    require_owner(caller, &post)?;

    let removed = state
        .store
        .delete_post_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("No post found"))?;

    tracing::info!(post_id = %id, "deleted post");
    Ok(ApiResponse::success(removed))
}

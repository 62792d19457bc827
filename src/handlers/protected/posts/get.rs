// GET /api/posts/:id - fetch a single post

use axum::extract::{Extension, Path, State};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, RequestIdentity};
use crate::store::Post;
use crate::AppState;

pub async fn post_get(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(id): Path<Uuid>,
) -> ApiResult<Post> {
    identity.require()?;

    let post = state
        .store
        .find_post_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("No post found"))?;

    Ok(ApiResponse::success(post))
}

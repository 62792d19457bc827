// PUT /api/posts/:id - update a post the caller owns

use axum::extract::{Extension, Json, Path, State};
use chrono::Utc;
use uuid::Uuid;

use super::{require_owner, PostInput};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, RequestIdentity};
use crate::store::Post;
use crate::validation;
use crate::AppState;

/// Update title, content and optionally the image of an owned post.
///
/// Pipeline order: gate, fetch, ownership, validation, write. The recorded
/// creator_email is never rewritten from the caller's identity, and an
/// absent image_url leaves the stored one untouched.
pub async fn post_update(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PostInput>,
) -> ApiResult<Post> {
    let caller = identity.require()?;

    let mut post = state
        .store
        .find_post_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("No post found"))?;
    require_owner(caller, &post)?;

    let violations = validation::validate_post_input(&payload.title, &payload.content);
    if !violations.is_empty() {
        return Err(ApiError::invalid_input("Invalid input", violations));
    }

    post.title = payload.title;
    post.content = payload.content;
    if let Some(image_url) = payload.image_url {
        post.image_url = image_url;
    }
    post.updated_at = Utc::now();

    state.store.update_post(post.clone()).await?;

    Ok(ApiResponse::success(post))
}

// POST /api/posts - create a post owned by the caller

use axum::extract::{Extension, Json, State};

use super::PostInput;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, RequestIdentity};
use crate::store::Post;
use crate::validation;
use crate::AppState;

/// Create a post. Gate, then validate, then a single atomic store write
/// that also appends the new id to the owner's post list.
pub async fn post_create(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(payload): Json<PostInput>,
) -> ApiResult<Post> {
    let caller = identity.require()?;

    let violations = validation::validate_post_input(&payload.title, &payload.content);
    if !violations.is_empty() {
        return Err(ApiError::invalid_input("Invalid input", violations));
    }

    // The claim proves who the caller was when the token was issued; the
    // user record must still exist before content can be attached to it.
    let creator = state
        .store
        .find_user_by_email(&caller.email)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("Invalid user"))?;

    let post = Post::new(
        payload.title,
        payload.content,
        payload.image_url.unwrap_or_default(),
        &creator,
    );
    state.store.create_post(post.clone()).await?;

    tracing::info!(post_id = %post.id, creator = %post.creator_email, "created post");
    Ok(ApiResponse::created(post))
}

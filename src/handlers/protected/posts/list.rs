// GET /api/posts - list all posts

use axum::extract::{Extension, State};
use serde::Serialize;

use crate::middleware::{ApiResponse, ApiResult, RequestIdentity};
use crate::store::Post;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    pub total_posts: usize,
}

/// List every post, newest first. The gate runs before the storage read, so
/// an anonymous caller costs no I/O.
pub async fn posts_list(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> ApiResult<PostsPage> {
    identity.require()?;

    let posts = state.store.list_all_posts().await?;
    let total_posts = posts.len();

    Ok(ApiResponse::success(PostsPage { posts, total_posts }))
}

// Identity-scoped post operations. Every handler gates on authentication
// before touching storage; mutations of existing posts additionally enforce
// ownership against the creator email recorded at creation time.

mod create;
mod delete;
mod get;
mod list;
mod update;

use serde::Deserialize;

pub use create::post_create;
pub use delete::post_delete;
pub use get::post_get;
pub use list::posts_list;
pub use update::post_update;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::store::Post;

/// Shared request body for post create and update.
#[derive(Debug, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Content ownership enforcer. Only the identity whose email was recorded
/// on the post at creation time may mutate it.
pub fn require_owner(user: &AuthUser, post: &Post) -> Result<(), ApiError> {
    if user.email != post.creator_email {
        return Err(ApiError::forbidden("Not authorized"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::User;
    use uuid::Uuid;

    fn post_by(email: &str) -> Post {
        let creator = User::new(email.to_string(), "digest".into(), "Someone".into());
        Post::new("title".into(), "content".into(), String::new(), &creator)
    }

    #[test]
    fn creator_passes_ownership_check() {
        let user = AuthUser {
            user_id: Uuid::new_v4(),
            email: "owner@b.com".to_string(),
        };
        assert!(require_owner(&user, &post_by("owner@b.com")).is_ok());
    }

    #[test]
    fn anyone_else_is_forbidden() {
        let user = AuthUser {
            user_id: Uuid::new_v4(),
            email: "other@b.com".to_string(),
        };
        let err = require_owner(&user, &post_by("owner@b.com")).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }
}

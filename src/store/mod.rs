// Storage abstraction for users and posts.
//
// The core trusts this interface to be consistent and performs no retries of
// its own; a backend failure surfaces to the caller as an internal error.

pub mod memory;
pub mod models;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use models::{Post, User, UserView};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("storage backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository contract consumed by the handlers.
///
/// Post creation and deletion keep the post table and the owner's post list
/// in step inside a single call, so a caller can never observe a post whose
/// id is missing from (or dangling in) its creator's record.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Insert a new user; fails with `Duplicate` when the email is taken.
    async fn save_user(&self, user: User) -> StoreResult<()>;

    /// Replace an existing user record, matched by email.
    async fn update_user(&self, user: User) -> StoreResult<()>;

    async fn find_post_by_id(&self, id: Uuid) -> StoreResult<Option<Post>>;

    /// Store a post and append its id to the creator's post list as one
    /// atomic write.
    async fn create_post(&self, post: Post) -> StoreResult<()>;

    /// Replace an existing post record, matched by id.
    async fn update_post(&self, post: Post) -> StoreResult<()>;

    /// Remove a post and detach its id from the creator's post list as one
    /// atomic write. Returns the removed post, or `None` if the id was
    /// unknown.
    async fn delete_post_by_id(&self, id: Uuid) -> StoreResult<Option<Post>>;

    async fn list_all_posts(&self) -> StoreResult<Vec<Post>>;
}

// In-memory reference implementation of the PostStore contract.
//
// A single RwLock over both tables makes the create/delete post operations
// atomic with the owner's post-list maintenance, which is the consistency
// guarantee the trait promises.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Post, User};
use super::{PostStore, StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    posts: HashMap<Uuid, Post>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.inner.read().await;
        Ok(tables.users.get(email).cloned())
    }

    async fn save_user(&self, user: User) -> StoreResult<()> {
        let mut tables = self.inner.write().await;
        if tables.users.contains_key(&user.email) {
            return Err(StoreError::Duplicate("User".to_string()));
        }
        tables.users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn update_user(&self, user: User) -> StoreResult<()> {
        let mut tables = self.inner.write().await;
        if !tables.users.contains_key(&user.email) {
            return Err(StoreError::NotFound("User".to_string()));
        }
        tables.users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn find_post_by_id(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let tables = self.inner.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn create_post(&self, post: Post) -> StoreResult<()> {
        let mut tables = self.inner.write().await;
        let Some(creator) = tables.users.get_mut(&post.creator_email) else {
            return Err(StoreError::NotFound("User".to_string()));
        };
        if !creator.post_ids.contains(&post.id) {
            creator.post_ids.push(post.id);
        }
        tables.posts.insert(post.id, post);
        Ok(())
    }

    async fn update_post(&self, post: Post) -> StoreResult<()> {
        let mut tables = self.inner.write().await;
        if !tables.posts.contains_key(&post.id) {
            return Err(StoreError::NotFound("Post".to_string()));
        }
        tables.posts.insert(post.id, post);
        Ok(())
    }

    async fn delete_post_by_id(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let mut tables = self.inner.write().await;
        let Some(post) = tables.posts.remove(&id) else {
            return Ok(None);
        };
        if let Some(creator) = tables.users.get_mut(&post.creator_email) {
            creator.post_ids.retain(|post_id| *post_id != id);
        }
        Ok(Some(post))
    }

    async fn list_all_posts(&self) -> StoreResult<Vec<Post>> {
        let tables = self.inner.read().await;
        let mut posts: Vec<Post> = tables.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

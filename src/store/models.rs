use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored user record. The email is the unique key; the password is held
/// only as a bcrypt digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub status: String,
    pub post_ids: Vec<Uuid>,
}

impl User {
    pub fn new(email: String, password_hash: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            status: "I am new!".to_string(),
            post_ids: Vec::new(),
        }
    }

    /// Client-facing view of the record, without the password digest.
    pub fn public_view(&self) -> UserView {
        UserView {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            status: self.status.clone(),
            post_ids: self.post_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub status: String,
    pub post_ids: Vec<Uuid>,
}

/// Stored post record. `creator_email` is set once at creation and is the
/// sole authority for ownership checks; updates never rewrite it from the
/// caller's current identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator_email: String,
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(title: String, content: String, image_url: String, creator: &User) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            image_url,
            creator_email: creator.email.clone(),
            creator_name: creator.name.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

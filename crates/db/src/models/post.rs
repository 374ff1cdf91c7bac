//! Post entity model and DTOs.
//!
//! One entity backs both the `/posts` and `/journals` route prefixes.

use scout_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post row from the `posts` table.
///
/// `likes` and `comments` are cached counters maintained transactionally
/// alongside the `post_likes` and `comments` tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    /// Authoring user.
    pub user_id: DbId,
    pub published: bool,
    pub featured: bool,
    pub likes: i32,
    pub comments: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post plus whether the requesting user currently likes it.
#[derive(Debug, Serialize)]
pub struct PostWithLiked {
    #[serde(flatten)]
    pub post: Post,
    pub liked: bool,
}

/// DTO for creating a new post.
#[derive(Debug)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
    pub user_id: DbId,
}

/// DTO for editing a post. All fields are optional. `featured` may only be
/// changed by admins (enforced in the handler).
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

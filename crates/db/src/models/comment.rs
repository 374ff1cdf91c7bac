//! Comment entity model and DTOs.

use scout_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub content: String,
    pub post_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new comment.
#[derive(Debug)]
pub struct CreateComment {
    pub post_id: DbId,
    pub user_id: DbId,
    pub content: String,
}

//! Repository for the `comments` table.
//!
//! Comment inserts and deletes keep the parent post's cached `comments`
//! counter in step inside a single transaction.

use scout_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content, post_id, user_id, created_at, updated_at";

/// Provides comment storage with counter maintenance.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment and bump the parent post's counter.
    ///
    /// Returns `None` (and writes nothing) when the parent post does not
    /// exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let parent = sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(input.post_id)
            .fetch_optional(&mut *tx)
            .await?;
        if parent.is_none() {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO comments (content, post_id, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(&input.content)
            .bind(input.post_id)
            .bind(input.user_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE posts SET comments = comments + 1 WHERE id = $1")
            .bind(input.post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(comment))
    }

    /// Find a comment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a post's comments, newest first.
    pub async fn list_for_post(pool: &PgPool, post_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM comments WHERE post_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a comment and decrement the parent post's counter.
    ///
    /// Returns `true` if a row was removed. The parent may already be gone
    /// (post deletion cascades to comments), in which case there is no
    /// counter to maintain.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let post_id =
            sqlx::query_scalar::<_, i64>("DELETE FROM comments WHERE id = $1 RETURNING post_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let deleted = match post_id {
            Some(post_id) => {
                sqlx::query("UPDATE posts SET comments = comments - 1 WHERE id = $1")
                    .bind(post_id)
                    .execute(&mut *tx)
                    .await?;
                true
            }
            None => false,
        };

        tx.commit().await?;
        Ok(deleted)
    }

    /// Total number of comments.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(pool)
            .await
    }
}

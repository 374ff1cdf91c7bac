//! Repository for the `post_likes` relation.
//!
//! Likes are a `(user_id, post_id)` relation with a uniqueness constraint;
//! the `posts.likes` column is a cached counter maintained in the same
//! transaction as the relation row, so the two can never diverge.

use scout_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::Post;
use crate::repositories::post_repo::COLUMNS;

/// Provides idempotent like/unlike mutations.
pub struct PostLikeRepo;

impl PostLikeRepo {
    /// Record that `user_id` likes `post_id`.
    ///
    /// Idempotent per user: the relation insert is `ON CONFLICT DO NOTHING`
    /// and the counter is only bumped when a row was actually inserted.
    /// Returns the post with its current counter, or `None` if the post
    /// does not exist.
    pub async fn like(
        pool: &PgPool,
        post_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Post>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let inserted = sqlx::query(
            "INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_post_likes_post_user DO NOTHING",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            > 0;

        if inserted {
            sqlx::query("UPDATE posts SET likes = likes + 1 WHERE id = $1")
                .bind(post_id)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(post))
    }

    /// Remove `user_id`'s like from `post_id`.
    ///
    /// Idempotent: the counter only drops when a relation row was actually
    /// deleted, so unlike-without-like leaves the counter alone. Returns
    /// the post with its current counter, or `None` if the post does not
    /// exist.
    pub async fn unlike(
        pool: &PgPool,
        post_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Post>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let deleted = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if deleted {
            sqlx::query("UPDATE posts SET likes = likes - 1 WHERE id = $1")
                .bind(post_id)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(post))
    }

    /// Whether `user_id` currently likes `post_id`.
    pub async fn has_liked(
        pool: &PgPool,
        post_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT 1 FROM post_likes WHERE post_id = $1 AND user_id = $2",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(found.is_some())
    }
}

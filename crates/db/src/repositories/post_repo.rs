//! Repository for the `posts` table.

use scout_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, UpdatePost};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, title, content, excerpt, cover_image, user_id, published, featured, \
     likes, comments, created_at, updated_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, content, excerpt, cover_image, user_id, published)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.cover_image)
            .bind(input.user_id)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a post by internal ID, published or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published posts, newest first. This is the public feed.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM posts WHERE published ORDER BY created_at DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// List a user's posts, drafts included, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM posts WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Post>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                excerpt = COALESCE($4, excerpt),
                cover_image = COALESCE($5, cover_image),
                published = COALESCE($6, published),
                featured = COALESCE($7, featured),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.cover_image)
            .bind(input.published)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Likes and comments cascade in the schema.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of posts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }
}

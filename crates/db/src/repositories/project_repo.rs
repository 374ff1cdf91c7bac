//! Repository for the `projects` table.

use scout_core::moderation::ModerationFlags;
use scout_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, website_url, icon_url, category_slug, user_id, \
                       pending, approved, verified, created_at, updated_at";

/// Provides CRUD operations and moderation transitions for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a newly submitted project, returning the created row.
    ///
    /// Moderation flags always start as [`ModerationFlags::submitted`].
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let flags = ModerationFlags::submitted();
        let query = format!(
            "INSERT INTO projects
                (name, description, website_url, icon_url, category_slug, user_id,
                 pending, approved, verified)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.website_url)
            .bind(&input.icon_url)
            .bind(&input.category_slug)
            .bind(input.user_id)
            .bind(flags.pending)
            .bind(flags.approved)
            .bind(flags.verified)
            .fetch_one(pool)
            .await
    }

    /// Find a project by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List approved projects, newest first. This is the public catalog.
    pub async fn list_approved(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE approved ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List approved projects in a category, newest first.
    pub async fn list_approved_by_category(
        pool: &PgPool,
        category_slug: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE approved AND category_slug = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(category_slug)
            .fetch_all(pool)
            .await
    }

    /// List the moderation queue: pending projects, oldest submission first.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE pending ORDER BY created_at");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List a user's projects in every moderation state, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update editable fields. Only non-`None` fields in `input` are applied;
    /// moderation flags are untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                website_url = COALESCE($4, website_url),
                icon_url = COALESCE($5, icon_url),
                category_slug = COALESCE($6, category_slug),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.website_url)
            .bind(&input.icon_url)
            .bind(&input.category_slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Write a full moderation flag set in one atomic statement.
    ///
    /// Concurrent transitions serialize on the row lock; the last one wins,
    /// matching the state machine's no-history semantics.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_moderation_flags(
        pool: &PgPool,
        id: DbId,
        flags: ModerationFlags,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                pending = $2, approved = $3, verified = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(flags.pending)
            .bind(flags.approved)
            .bind(flags.verified)
            .fetch_optional(pool)
            .await
    }

    /// Grant the verified badge, guarded in SQL so the badge can never land
    /// on a project that lost approval since the handler's precondition
    /// check. Returns `None` when the row is missing OR not approved.
    pub async fn set_verified_if_approved(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET verified = true, updated_at = NOW()
             WHERE id = $1 AND approved
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of projects referencing a category slug. Used to block
    /// category deletion while in use.
    pub async fn count_by_category_slug(
        pool: &PgPool,
        category_slug: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE category_slug = $1")
            .bind(category_slug)
            .fetch_one(pool)
            .await
    }

    /// Number of projects awaiting review.
    pub async fn count_pending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE pending")
            .fetch_one(pool)
            .await
    }

    /// Number of approved projects.
    pub async fn count_approved(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE approved")
            .fetch_one(pool)
            .await
    }
}

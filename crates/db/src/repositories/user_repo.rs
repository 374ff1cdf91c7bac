//! Repository for the `users` table.

use scout_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateProfile, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, role_id, verified, is_active, \
                       failed_login_count, locked_until, last_login_at, member_since, \
                       bio, bio_updated_at, location, location_updated_at, \
                       website, website_updated_at, avatar_url, avatar_updated_at, \
                       header_image, header_updated_at, company, company_updated_at, \
                       updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users, newest members first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY member_since DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Apply a partial profile update.
    ///
    /// Only non-`None` fields are written, and each written field also bumps
    /// its own `*_updated_at` column. Returns `None` if the user is gone.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                bio = COALESCE($2, bio),
                bio_updated_at = CASE WHEN $2 IS NULL THEN bio_updated_at ELSE NOW() END,
                location = COALESCE($3, location),
                location_updated_at = CASE WHEN $3 IS NULL THEN location_updated_at ELSE NOW() END,
                website = COALESCE($4, website),
                website_updated_at = CASE WHEN $4 IS NULL THEN website_updated_at ELSE NOW() END,
                avatar_url = COALESCE($5, avatar_url),
                avatar_updated_at = CASE WHEN $5 IS NULL THEN avatar_updated_at ELSE NOW() END,
                header_image = COALESCE($6, header_image),
                header_updated_at = CASE WHEN $6 IS NULL THEN header_updated_at ELSE NOW() END,
                company = COALESCE($7, company),
                company_updated_at = CASE WHEN $7 IS NULL THEN company_updated_at ELSE NOW() END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.bio)
            .bind(&input.location)
            .bind(&input.website)
            .bind(&input.avatar_url)
            .bind(&input.header_image)
            .bind(&input.company)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the verification badge. Idempotent.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_verified(
        pool: &PgPool,
        id: DbId,
        verified: bool,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET verified = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(verified)
            .fetch_optional(pool)
            .await
    }

    /// Increment the failed login counter by 1.
    pub async fn increment_failed_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET failed_login_count = failed_login_count + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Lock a user account until the specified timestamp.
    pub async fn lock_account(pool: &PgPool, id: DbId, until: Timestamp) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET locked_until = $2 WHERE id = $1")
            .bind(id)
            .bind(until)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a successful login: reset the failure counter, clear any lock,
    /// and stamp `last_login_at`.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                failed_login_count = 0,
                locked_until = NULL,
                last_login_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Total number of users.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}

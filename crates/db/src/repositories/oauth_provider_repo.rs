//! Repository for the `oauth_providers` table.

use scout_core::types::DbId;
use sqlx::PgPool;

use crate::models::oauth_provider::{CreateOauthProvider, OauthProvider, UpdateOauthProvider};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, client_id, client_secret, authorize_url, token_url, \
                       scopes, enabled, created_at, updated_at";

/// Provides CRUD operations for OAuth provider configuration.
pub struct OauthProviderRepo;

impl OauthProviderRepo {
    /// Insert a new provider config, returning the created row.
    ///
    /// `enabled` defaults to `true` when omitted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOauthProvider,
    ) -> Result<OauthProvider, sqlx::Error> {
        let query = format!(
            "INSERT INTO oauth_providers
                (name, client_id, client_secret, authorize_url, token_url, scopes, enabled)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OauthProvider>(&query)
            .bind(&input.name)
            .bind(&input.client_id)
            .bind(&input.client_secret)
            .bind(&input.authorize_url)
            .bind(&input.token_url)
            .bind(&input.scopes)
            .bind(input.enabled)
            .fetch_one(pool)
            .await
    }

    /// Find a provider config by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OauthProvider>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM oauth_providers WHERE id = $1");
        sqlx::query_as::<_, OauthProvider>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all provider configs, alphabetically by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<OauthProvider>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM oauth_providers ORDER BY name");
        sqlx::query_as::<_, OauthProvider>(&query)
            .fetch_all(pool)
            .await
    }

    /// Patch a provider config. Only non-`None` fields in `input` are
    /// applied; the name slug is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOauthProvider,
    ) -> Result<Option<OauthProvider>, sqlx::Error> {
        let query = format!(
            "UPDATE oauth_providers SET
                client_id = COALESCE($2, client_id),
                client_secret = COALESCE($3, client_secret),
                authorize_url = COALESCE($4, authorize_url),
                token_url = COALESCE($5, token_url),
                scopes = COALESCE($6, scopes),
                enabled = COALESCE($7, enabled),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OauthProvider>(&query)
            .bind(id)
            .bind(&input.client_id)
            .bind(&input.client_secret)
            .bind(&input.authorize_url)
            .bind(&input.token_url)
            .bind(&input.scopes)
            .bind(input.enabled)
            .fetch_optional(pool)
            .await
    }

    /// Delete a provider config by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM oauth_providers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

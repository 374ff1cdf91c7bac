//! OAuth provider configuration model and DTOs.
//!
//! Configuration rows only; the login flow against these providers is
//! handled elsewhere.

use scout_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A provider config row from the `oauth_providers` table.
///
/// Contains the client secret -- NEVER serialize this to API responses.
/// Use [`OauthProviderResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct OauthProvider {
    pub id: DbId,
    /// Provider slug, e.g. `"github"`.
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    pub authorize_url: String,
    pub token_url: String,
    pub scopes: Option<String>,
    pub enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe provider representation for API responses (no client secret).
#[derive(Debug, Clone, Serialize)]
pub struct OauthProviderResponse {
    pub id: DbId,
    pub name: String,
    pub client_id: String,
    pub authorize_url: String,
    pub token_url: String,
    pub scopes: Option<String>,
    pub enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<OauthProvider> for OauthProviderResponse {
    fn from(p: OauthProvider) -> Self {
        OauthProviderResponse {
            id: p.id,
            name: p.name,
            client_id: p.client_id,
            authorize_url: p.authorize_url,
            token_url: p.token_url,
            scopes: p.scopes,
            enabled: p.enabled,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// DTO for registering a provider.
#[derive(Debug, Deserialize)]
pub struct CreateOauthProvider {
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    pub authorize_url: String,
    pub token_url: String,
    pub scopes: Option<String>,
    /// Defaults to `true` if omitted.
    pub enabled: Option<bool>,
}

/// DTO for patching a provider. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOauthProvider {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub authorize_url: Option<String>,
    pub token_url: Option<String>,
    pub scopes: Option<String>,
    pub enabled: Option<bool>,
}

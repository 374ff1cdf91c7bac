//! Handlers for OAuth provider configuration under `/oauth/admin/providers`.
//!
//! Configuration rows only; no login flow runs against them here. Client
//! secrets are accepted on input and never serialized back out.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scout_core::catalog::{validate_slug, validate_url};
use scout_core::error::CoreError;
use scout_core::types::DbId;
use scout_db::models::oauth_provider::{
    CreateOauthProvider, OauthProviderResponse, UpdateOauthProvider,
};
use scout_db::repositories::OauthProviderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/oauth/admin/providers
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<OauthProviderResponse>>>> {
    let providers = OauthProviderRepo::list(&state.pool).await?;
    let data = providers.into_iter().map(Into::into).collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/oauth/admin/providers
///
/// Register a provider. The name is a slug (e.g. `"github"`); duplicates
/// are a 409 via the unique constraint.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateOauthProvider>,
) -> AppResult<(StatusCode, Json<DataResponse<OauthProviderResponse>>)> {
    validate_slug(&input.name)?;
    validate_url(&input.authorize_url)?;
    validate_url(&input.token_url)?;

    let provider = OauthProviderRepo::create(&state.pool, &input).await?;
    tracing::info!(
        provider_id = provider.id,
        name = %provider.name,
        admin_id = admin.user_id,
        "OAuth provider registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: provider.into(),
        }),
    ))
}

/// GET /api/v1/oauth/admin/providers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OauthProviderResponse>>> {
    let provider = OauthProviderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("OAuth provider", id)))?;

    Ok(Json(DataResponse {
        data: provider.into(),
    }))
}

/// PATCH /api/v1/oauth/admin/providers/{id}
///
/// Partial update; the name slug is immutable.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOauthProvider>,
) -> AppResult<Json<DataResponse<OauthProviderResponse>>> {
    if let Some(authorize_url) = input.authorize_url.as_deref() {
        validate_url(authorize_url)?;
    }
    if let Some(token_url) = input.token_url.as_deref() {
        validate_url(token_url)?;
    }

    let provider = OauthProviderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("OAuth provider", id)))?;

    Ok(Json(DataResponse {
        data: provider.into(),
    }))
}

/// DELETE /api/v1/oauth/admin/providers/{id}
///
/// Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = OauthProviderRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::not_found("OAuth provider", id)));
    }

    tracing::info!(provider_id = id, admin_id = admin.user_id, "OAuth provider removed");
    Ok(StatusCode::NO_CONTENT)
}

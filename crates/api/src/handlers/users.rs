//! Handlers for the `/users` resource (public profiles, own-profile edit).

use axum::extract::{Path, State};
use axum::Json;
use scout_core::catalog::validate_url;
use scout_core::error::CoreError;
use scout_db::models::user::{ProfileResponse, UpdateProfile};
use scout_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{username}
///
/// Public profile by username.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            key: username,
        }))?;

    Ok(Json(DataResponse {
        data: ProfileResponse::from(&user),
    }))
}

/// PUT /api/v1/users/me
///
/// Update the caller's profile fields. Only provided fields change, and
/// each changed field bumps its own `*_updated_at` timestamp.
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    if let Some(website) = input.website.as_deref() {
        validate_url(website)?;
    }
    if let Some(avatar_url) = input.avatar_url.as_deref() {
        validate_url(avatar_url)?;
    }
    if let Some(header_image) = input.header_image.as_deref() {
        validate_url(header_image)?;
    }

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    tracing::info!(user_id = user.id, "Profile updated");

    Ok(Json(DataResponse {
        data: ProfileResponse::from(&user),
    }))
}

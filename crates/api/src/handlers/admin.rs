//! Handlers for the `/admin` surface: user listing, user verification,
//! and dashboard stats. Project moderation lives in
//! [`crate::handlers::moderation`].

use axum::extract::{Path, State};
use axum::Json;
use scout_core::error::CoreError;
use scout_core::types::DbId;
use scout_db::models::user::UserResponse;
use scout_db::repositories::{CommentRepo, PostRepo, ProjectRepo, RoleRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::auth::build_user_response;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Dashboard counts for the admin overview page.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub users: i64,
    pub projects_pending: i64,
    pub projects_approved: i64,
    pub posts: i64,
    pub comments: i64,
}

/// GET /api/v1/admin/users
///
/// All users, newest members first, with resolved role names.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;

    let roles = RoleRepo::list(&state.pool).await?;
    let role_name = |role_id: DbId| {
        roles
            .iter()
            .find(|r| r.id == role_id)
            .map(|r| r.name.clone())
            .unwrap_or_default()
    };

    let data = users
        .iter()
        .map(|u| build_user_response(u, role_name(u.role_id)))
        .collect();

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/users/{id}/verify
///
/// Grant a user the verified badge. Idempotent, no precondition.
pub async fn verify_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    set_user_verified(&state, admin.user_id, id, true).await
}

/// POST /api/v1/admin/users/{id}/unverify
///
/// Remove a user's verified badge. Idempotent.
pub async fn unverify_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    set_user_verified(&state, admin.user_id, id, false).await
}

async fn set_user_verified(
    state: &AppState,
    admin_id: DbId,
    id: DbId,
    verified: bool,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::set_verified(&state.pool, id, verified)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    tracing::info!(user_id = id, admin_id, verified, "User verification changed");

    Ok(Json(DataResponse {
        data: build_user_response(&user, role),
    }))
}

/// GET /api/v1/admin/stats
///
/// Counts for the admin dashboard.
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<StatsResponse>>> {
    let stats = StatsResponse {
        users: UserRepo::count(&state.pool).await?,
        projects_pending: ProjectRepo::count_pending(&state.pool).await?,
        projects_approved: ProjectRepo::count_approved(&state.pool).await?,
        posts: PostRepo::count(&state.pool).await?,
        comments: CommentRepo::count(&state.pool).await?,
    };

    Ok(Json(DataResponse { data: stats }))
}

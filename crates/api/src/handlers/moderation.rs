//! Handlers for the project moderation queue under `/admin/projects`.
//!
//! Transitions are computed by `scout_core::moderation` and persisted as a
//! single atomic `UPDATE`, so two admins acting on the same project at once
//! serialize on the row lock and the last transition wins.

use axum::extract::{Path, State};
use axum::Json;
use scout_core::error::CoreError;
use scout_core::types::DbId;
use scout_db::models::project::Project;
use scout_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/projects/pending
///
/// The moderation queue, oldest submission first.
pub async fn pending_queue(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/projects/{id}/approve
///
/// Approve a project, putting it in the public catalog. Idempotent.
pub async fn approve(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    let flags = project.moderation_flags().approve();
    let updated = ProjectRepo::set_moderation_flags(&state.pool, id, flags)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    tracing::info!(project_id = id, admin_id = admin.user_id, "Project approved");
    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/admin/projects/{id}/reject
///
/// Reject a project. Idempotent; also strips the verified badge, and a
/// later re-approval starts unverified.
pub async fn reject(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    let flags = project.moderation_flags().reject();
    let updated = ProjectRepo::set_moderation_flags(&state.pool, id, flags)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    tracing::info!(project_id = id, admin_id = admin.user_id, "Project rejected");
    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/admin/projects/{id}/verify
///
/// Grant the verified badge. Requires the project to be approved (409
/// otherwise); idempotent on approved projects.
pub async fn verify(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    // Precondition check against the snapshot for the precise error message.
    project.moderation_flags().verify()?;

    // The guarded UPDATE re-checks approval, covering a concurrent reject
    // between the read above and this write.
    let updated = ProjectRepo::set_verified_if_approved(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Cannot verify a project that is no longer approved".into(),
            ))
        })?;

    tracing::info!(project_id = id, admin_id = admin.user_id, "Project verified");
    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/admin/projects/{id}/unverify
///
/// Remove the verified badge. No precondition; idempotent.
pub async fn unverify(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    let flags = project.moderation_flags().unverify();
    let updated = ProjectRepo::set_moderation_flags(&state.pool, id, flags)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    tracing::info!(project_id = id, admin_id = admin.user_id, "Project unverified");
    Ok(Json(DataResponse { data: updated }))
}

//! Handlers for the `/projects` resource (public catalog + submission).
//!
//! Moderation transitions live in [`crate::handlers::moderation`]; these
//! handlers cover the member-facing surface: browsing approved projects,
//! submitting new ones, and editing or removing one's own.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scout_core::catalog::{
    validate_description, validate_project_name, validate_slug, validate_url,
};
use scout_core::error::CoreError;
use scout_core::types::DbId;
use scout_db::models::project::{CreateProject, Project, UpdateProject};
use scout_db::repositories::{CategoryRepo, ProjectRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize)]
pub struct SubmitProjectRequest {
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub icon_url: Option<String>,
    pub category_slug: String,
}

/// GET /api/v1/projects
///
/// The public catalog: approved projects, newest first.
pub async fn list_approved(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_approved(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/category/{slug}
///
/// Approved projects in one category. An unknown category is a 404 rather
/// than an empty list, so typos don't look like empty categories.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    if CategoryRepo::find_by_slug(&state.pool, &slug).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            key: slug,
        }));
    }

    let projects = ProjectRepo::list_approved_by_category(&state.pool, &slug).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/mine
///
/// The caller's own submissions in every moderation state.
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
///
/// A single approved project. Pending and rejected projects are invisible
/// here (404); owners see theirs under `/projects/mine`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|p| p.approved)
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects
///
/// Submit a project for review. It enters the moderation queue as pending
/// and stays out of the public catalog until approved.
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<SubmitProjectRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    validate_project_name(&input.name)?;
    validate_description(&input.description)?;
    validate_url(&input.website_url)?;
    if let Some(icon_url) = input.icon_url.as_deref() {
        validate_url(icon_url)?;
    }
    validate_slug(&input.category_slug)?;

    if CategoryRepo::find_by_slug(&state.pool, &input.category_slug)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown category '{}'",
            input.category_slug
        ))));
    }

    let create = CreateProject {
        name: input.name,
        description: input.description,
        website_url: input.website_url,
        icon_url: input.icon_url,
        category_slug: input.category_slug,
        user_id: auth.user_id,
    };
    let project = ProjectRepo::create(&state.pool, &create).await?;

    tracing::info!(
        project_id = project.id,
        user_id = auth.user_id,
        "Project submitted for review"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/projects/{id}
///
/// Edit project fields. Owner or admin only; moderation flags are not
/// editable through this path.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    if existing.user_id != auth.user_id && !auth.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner or an admin may edit this project".into(),
        )));
    }

    if let Some(name) = input.name.as_deref() {
        validate_project_name(name)?;
    }
    if let Some(description) = input.description.as_deref() {
        validate_description(description)?;
    }
    if let Some(website_url) = input.website_url.as_deref() {
        validate_url(website_url)?;
    }
    if let Some(icon_url) = input.icon_url.as_deref() {
        validate_url(icon_url)?;
    }
    if let Some(slug) = input.category_slug.as_deref() {
        validate_slug(slug)?;
        if CategoryRepo::find_by_slug(&state.pool, slug).await?.is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown category '{slug}'"
            ))));
        }
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
///
/// Remove a project. Owner or admin only. Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    if existing.user_id != auth.user_id && !auth.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner or an admin may delete this project".into(),
        )));
    }

    ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(project_id = id, user_id = auth.user_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}

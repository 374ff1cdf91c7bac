//! Handlers for the `/categories` resource.
//!
//! Listing is public; create, update, and delete are admin-only and
//! mounted under `/admin/categories`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scout_core::catalog::{validate_category_name, validate_slug};
use scout_core::error::CoreError;
use scout_core::types::DbId;
use scout_db::models::category::{Category, CreateCategory, UpdateCategory};
use scout_db::repositories::{CategoryRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// All categories, alphabetical.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
///
/// Create a category. Duplicate slug or name is a 409 via the `uq_`
/// constraints.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    validate_slug(&input.slug)?;
    validate_category_name(&input.name)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/admin/categories/{id}
///
/// Update display fields. The slug is immutable because projects reference
/// it by value.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    if let Some(name) = input.name.as_deref() {
        validate_category_name(name)?;
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Category", id)))?;

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Delete a category. Blocked with a 409 while any project still references
/// its slug; the reference is by value, so this is the only guard.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Category", id)))?;

    let in_use = ProjectRepo::count_by_category_slug(&state.pool, &category.slug).await?;
    if in_use > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Category '{}' is referenced by {in_use} project(s)",
            category.slug
        ))));
    }

    CategoryRepo::delete(&state.pool, id).await?;
    tracing::info!(category_id = id, slug = %category.slug, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the `/posts` resource (and its `/journals` read alias).
//!
//! Likes are a per-user relation with a cached counter; both mutations are
//! idempotent per user and run transactionally in the repository.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scout_core::engagement::{validate_post_content, validate_post_title};
use scout_core::error::CoreError;
use scout_core::types::DbId;
use scout_db::models::post::{CreatePost, Post, PostWithLiked, UpdatePost};
use scout_db::repositories::{PostLikeRepo, PostRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /posts`.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    /// Defaults to `false` (draft) if omitted.
    pub published: Option<bool>,
}

/// GET /api/v1/posts (also GET /api/v1/journals)
///
/// Published posts, newest first.
pub async fn list_published(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let posts = PostRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/posts/{id} (also GET /api/v1/journals/{id})
///
/// A single published post. Drafts are invisible here (404); authors see
/// theirs under `/posts/mine`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Post>>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|p| p.published)
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?;

    Ok(Json(DataResponse { data: post }))
}

/// GET /api/v1/posts/mine
///
/// The caller's own posts, drafts included.
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let posts = PostRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/posts
///
/// Create a post, as draft unless `published` is set.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Post>>)> {
    validate_post_title(&input.title)?;
    validate_post_content(&input.content)?;

    let create = CreatePost {
        title: input.title,
        content: input.content,
        excerpt: input.excerpt,
        cover_image: input.cover_image,
        published: input.published.unwrap_or(false),
        user_id: auth.user_id,
    };
    let post = PostRepo::create(&state.pool, &create).await?;

    tracing::info!(post_id = post.id, user_id = auth.user_id, "Post created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/v1/posts/{id}
///
/// Edit a post. Owner or admin only; the `featured` flag is admin-only.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<Json<DataResponse<Post>>> {
    let existing = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?;

    if existing.user_id != auth.user_id && !auth.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author or an admin may edit this post".into(),
        )));
    }
    if input.featured.is_some() && !auth.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins may feature posts".into(),
        )));
    }

    if let Some(title) = input.title.as_deref() {
        validate_post_title(title)?;
    }
    if let Some(content) = input.content.as_deref() {
        validate_post_content(content)?;
    }

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?;

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/posts/{id}
///
/// Remove a post; its likes and comments cascade. Owner or admin only.
/// Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?;

    if existing.user_id != auth.user_id && !auth.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author or an admin may delete this post".into(),
        )));
    }

    PostRepo::delete(&state.pool, id).await?;
    tracing::info!(post_id = id, user_id = auth.user_id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/posts/{id}/like
///
/// Like a post. Idempotent per user: liking twice leaves the counter where
/// one like put it.
pub async fn like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PostWithLiked>>> {
    let post = PostLikeRepo::like(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?;

    Ok(Json(DataResponse {
        data: PostWithLiked { post, liked: true },
    }))
}

/// POST /api/v1/posts/{id}/unlike
///
/// Remove the caller's like. Idempotent: unliking without a prior like
/// leaves the counter untouched.
pub async fn unlike(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PostWithLiked>>> {
    let post = PostLikeRepo::unlike(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?;

    Ok(Json(DataResponse {
        data: PostWithLiked { post, liked: false },
    }))
}

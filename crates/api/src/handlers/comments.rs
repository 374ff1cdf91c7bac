//! Handlers for comments on posts.
//!
//! Adding and deleting keep the parent post's cached counter in step via
//! the repository's transactions. Deleting someone else's comment as a
//! non-admin reports 404, not 403, so the response does not confirm the
//! comment exists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scout_core::engagement::validate_comment_content;
use scout_core::error::CoreError;
use scout_core::types::DbId;
use scout_db::models::comment::{Comment, CreateComment};
use scout_db::repositories::CommentRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /posts/{id}/comment`.
#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub content: String,
}

/// GET /api/v1/posts/{id}/comments (also under /journals)
///
/// A post's comments, newest first.
pub async fn list_for_post(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Comment>>>> {
    let comments = CommentRepo::list_for_post(&state.pool, post_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/posts/{id}/comment
///
/// Add a comment. Content must be non-empty after trimming; the validation
/// runs before any row is written, so a rejected comment never touches the
/// parent counter.
pub async fn add(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<DbId>,
    Json(input): Json<AddCommentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    validate_comment_content(&input.content)?;

    let create = CreateComment {
        post_id,
        user_id: auth.user_id,
        content: input.content.trim().to_string(),
    };
    let comment = CommentRepo::create(&state.pool, &create)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", post_id)))?;

    tracing::info!(
        comment_id = comment.id,
        post_id,
        user_id = auth.user_id,
        "Comment added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// DELETE /api/v1/comments/{id}
///
/// Remove a comment. Permitted for the comment's owner or an admin; any
/// other caller gets the same 404 as a missing comment. Returns 204.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Comment", id)))?;

    if comment.user_id != auth.user_id && !auth.is_admin() {
        // Existence hiding: same response as an unknown id.
        return Err(AppError::Core(CoreError::not_found("Comment", id)));
    }

    CommentRepo::delete(&state.pool, id).await?;
    tracing::info!(comment_id = id, user_id = auth.user_id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}

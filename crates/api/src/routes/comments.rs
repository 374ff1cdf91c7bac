//! Route definitions for the `/comments` resource.
//!
//! Creation and listing hang off the parent post in [`super::posts`]; only
//! deletion addresses a comment by its own id.

use axum::routing::delete;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// DELETE /{id}  -> delete (owner or admin; 404 otherwise)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(comments::delete))
}

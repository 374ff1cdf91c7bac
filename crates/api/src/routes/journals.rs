//! Route alias mounting the post read surface at `/journals`.
//!
//! The front end historically addressed the same entity under both
//! `/posts` and `/journals`; the alias keeps old clients working without
//! duplicating any handler logic. Writes go through `/posts` only.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, posts};
use crate::state::AppState;

/// Routes mounted at `/journals`.
///
/// ```text
/// GET /                -> list_published (public)
/// GET /{id}            -> get_by_id (public, published only)
/// GET /{id}/comments   -> list comments (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_published))
        .route("/{id}", get(posts::get_by_id))
        .route("/{id}/comments", get(comments::list_for_post))
}

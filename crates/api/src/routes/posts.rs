//! Route definitions for the `/posts` resource.
//!
//! The read surface is also mounted at `/journals` by [`super::journals`];
//! one entity, two prefixes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comments, posts};
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /                -> list_published (public)
/// POST   /                -> create (requires auth)
/// GET    /mine            -> list_mine (requires auth)
/// GET    /{id}            -> get_by_id (public, published only)
/// PUT    /{id}            -> update (author or admin)
/// DELETE /{id}            -> delete (author or admin)
/// POST   /{id}/like       -> like (requires auth, idempotent)
/// POST   /{id}/unlike     -> unlike (requires auth, idempotent)
/// GET    /{id}/comments   -> list comments (public)
/// POST   /{id}/comment    -> add comment (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_published).post(posts::create))
        .route("/mine", get(posts::list_mine))
        .route(
            "/{id}",
            get(posts::get_by_id)
                .put(posts::update)
                .delete(posts::delete),
        )
        .route("/{id}/like", post(posts::like))
        .route("/{id}/unlike", post(posts::unlike))
        .route("/{id}/comments", get(comments::list_for_post))
        .route("/{id}/comment", post(comments::add))
}

//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list_approved (public)
/// POST   /                  -> submit (requires auth)
/// GET    /mine              -> list_mine (requires auth)
/// GET    /category/{slug}   -> list_by_category (public)
/// GET    /{id}              -> get_by_id (public, approved only)
/// PUT    /{id}              -> update (owner or admin)
/// DELETE /{id}              -> delete (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_approved).post(projects::submit))
        .route("/mine", get(projects::list_mine))
        .route("/category/{slug}", get(projects::list_by_category))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
}

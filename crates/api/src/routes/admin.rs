//! Route definitions for the `/admin` resource.
//!
//! All routes require the `admin` role (enforced by handler extractors).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, categories, moderation};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /projects/pending          -> moderation queue
/// POST   /projects/{id}/approve     -> approve
/// POST   /projects/{id}/reject      -> reject
/// POST   /projects/{id}/verify      -> verify (requires approved)
/// POST   /projects/{id}/unverify    -> unverify
///
/// GET    /users                     -> list_users
/// POST   /users/{id}/verify         -> verify_user
/// POST   /users/{id}/unverify       -> unverify_user
///
/// POST   /categories                -> create
/// PUT    /categories/{id}           -> update
/// DELETE /categories/{id}           -> delete (409 while in use)
///
/// GET    /stats                     -> dashboard counts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/pending", get(moderation::pending_queue))
        .route("/projects/{id}/approve", post(moderation::approve))
        .route("/projects/{id}/reject", post(moderation::reject))
        .route("/projects/{id}/verify", post(moderation::verify))
        .route("/projects/{id}/unverify", post(moderation::unverify))
        .route("/users", get(admin::list_users))
        .route("/users/{id}/verify", post(admin::verify_user))
        .route("/users/{id}/unverify", post(admin::unverify_user))
        .route("/categories", post(categories::create))
        .route(
            "/categories/{id}",
            axum::routing::put(categories::update).delete(categories::delete),
        )
        .route("/stats", get(admin::stats))
}

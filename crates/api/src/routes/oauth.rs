//! Route definitions for OAuth provider configuration.
//!
//! The `/oauth/admin/providers` prefix is kept for compatibility with the
//! existing admin front end.

use axum::routing::get;
use axum::Router;

use crate::handlers::oauth_providers;
use crate::state::AppState;

/// Routes mounted at `/oauth`.
///
/// ```text
/// GET    /admin/providers        -> list (admin only)
/// POST   /admin/providers        -> create
/// GET    /admin/providers/{id}   -> get_by_id
/// PATCH  /admin/providers/{id}   -> update
/// DELETE /admin/providers/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/providers",
            get(oauth_providers::list).post(oauth_providers::create),
        )
        .route(
            "/admin/providers/{id}",
            get(oauth_providers::get_by_id)
                .patch(oauth_providers::update)
                .delete(oauth_providers::delete),
        )
}

//! Route definitions for the public `/categories` resource.
//!
//! Category management (create/update/delete) is admin-only and mounted
//! under `/admin/categories` in [`super::admin`].

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET /  -> list (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(categories::list))
}

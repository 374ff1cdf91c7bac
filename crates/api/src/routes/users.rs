//! Route definitions for the `/users` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// PUT /me          -> update_me (requires auth)
/// GET /{username}  -> get_profile (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", put(users::update_me))
        .route("/{username}", get(users::get_profile))
}

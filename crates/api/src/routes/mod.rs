pub mod admin;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod health;
pub mod journals;
pub mod oauth;
pub mod posts;
pub mod projects;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
/// /auth/me                             current account (requires auth)
///
/// /users/{username}                    public profile
/// /users/me                            update own profile (PUT)
///
/// /categories                          list categories (public)
///
/// /projects                            approved catalog (GET), submit (POST)
/// /projects/mine                       own submissions, any state
/// /projects/category/{slug}            approved projects in category
/// /projects/{id}                       get (approved only), update, delete
///
/// /posts                               published feed (GET), create (POST)
/// /posts/mine                          own posts, drafts included
/// /posts/{id}                          get (published only), update, delete
/// /posts/{id}/like|unlike              idempotent like mutations (POST)
/// /posts/{id}/comments                 list comments (GET)
/// /posts/{id}/comment                  add comment (POST)
/// /journals...                         read alias for /posts
///
/// /comments/{id}                       delete comment (DELETE)
///
/// /admin/projects/pending              moderation queue (admin)
/// /admin/projects/{id}/approve|reject|verify|unverify   transitions (admin)
/// /admin/users                         list users (admin)
/// /admin/users/{id}/verify|unverify    user badge (admin)
/// /admin/categories[/{id}]             category management (admin)
/// /admin/stats                         dashboard counts (admin)
///
/// /oauth/admin/providers[/{id}]        provider config CRUD (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/categories", categories::router())
        .nest("/projects", projects::router())
        .nest("/posts", posts::router())
        .nest("/journals", journals::router())
        .nest("/comments", comments::router())
        .nest("/admin", admin::router())
        .nest("/oauth", oauth::router())
}

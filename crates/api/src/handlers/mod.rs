//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate payloads with `scout_core`, delegate persistence to
//! the repositories in `scout_db`, and map errors via [`crate::error::AppError`].

pub mod admin;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod moderation;
pub mod oauth_providers;
pub mod posts;
pub mod projects;
pub mod users;

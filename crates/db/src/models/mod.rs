//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates
//!
//! Entities holding secrets (password hashes, OAuth client secrets) do not
//! derive `Serialize`; dedicated response structs carry the safe subset.

pub mod category;
pub mod comment;
pub mod oauth_provider;
pub mod post;
pub mod project;
pub mod role;
pub mod session;
pub mod user;

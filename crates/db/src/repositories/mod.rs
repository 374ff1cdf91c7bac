//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-row mutations that
//! must stay consistent (likes and comments with their cached counters)
//! run inside a transaction here rather than in the handlers.

pub mod category_repo;
pub mod comment_repo;
pub mod oauth_provider_repo;
pub mod post_like_repo;
pub mod post_repo;
pub mod project_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use oauth_provider_repo::OauthProviderRepo;
pub use post_like_repo::PostLikeRepo;
pub use post_repo::PostRepo;
pub use project_repo::ProjectRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;

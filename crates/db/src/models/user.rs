//! User entity model and DTOs.

use scout_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserResponse`] (account view) or [`ProfileResponse`] (public view).
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    /// Admin-granted verification badge.
    pub verified: bool,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub member_since: Timestamp,
    pub bio: Option<String>,
    pub bio_updated_at: Option<Timestamp>,
    pub location: Option<String>,
    pub location_updated_at: Option<Timestamp>,
    pub website: Option<String>,
    pub website_updated_at: Option<Timestamp>,
    pub avatar_url: Option<String>,
    pub avatar_updated_at: Option<Timestamp>,
    pub header_image: Option<String>,
    pub header_updated_at: Option<Timestamp>,
    pub company: Option<String>,
    pub company_updated_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

/// Account-facing user representation (own account and admin listings).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// Resolved role name (`"admin"` or `"member"`).
    pub role: String,
    pub verified: bool,
    pub is_active: bool,
    pub member_since: Timestamp,
    pub last_login_at: Option<Timestamp>,
}

/// Public profile representation. No email, no account status.
///
/// Each profile field carries its own last-updated timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub username: String,
    pub verified: bool,
    pub member_since: Timestamp,
    pub bio: Option<String>,
    pub bio_updated_at: Option<Timestamp>,
    pub location: Option<String>,
    pub location_updated_at: Option<Timestamp>,
    pub website: Option<String>,
    pub website_updated_at: Option<Timestamp>,
    pub avatar_url: Option<String>,
    pub avatar_updated_at: Option<Timestamp>,
    pub header_image: Option<String>,
    pub header_updated_at: Option<Timestamp>,
    pub company: Option<String>,
    pub company_updated_at: Option<Timestamp>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        ProfileResponse {
            id: user.id,
            username: user.username.clone(),
            verified: user.verified,
            member_since: user.member_since,
            bio: user.bio.clone(),
            bio_updated_at: user.bio_updated_at,
            location: user.location.clone(),
            location_updated_at: user.location_updated_at,
            website: user.website.clone(),
            website_updated_at: user.website_updated_at,
            avatar_url: user.avatar_url.clone(),
            avatar_updated_at: user.avatar_updated_at,
            header_image: user.header_image.clone(),
            header_updated_at: user.header_updated_at,
            company: user.company.clone(),
            company_updated_at: user.company_updated_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
}

/// DTO for updating profile fields. Only provided fields are applied, and
/// each applied field also bumps its own `*_updated_at` timestamp.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
    pub header_image: Option<String>,
    pub company: Option<String>,
}

//! Project entity model and DTOs.

use scout_core::moderation::ModerationFlags;
use scout_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// The review state is the `pending` / `approved` flag pair plus the
/// orthogonal `verified` badge; see `scout_core::moderation` for how the
/// logical state is derived.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub icon_url: Option<String>,
    pub category_slug: String,
    /// Owning user.
    pub user_id: DbId,
    pub pending: bool,
    pub approved: bool,
    pub verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// The project's moderation flags as a core value.
    pub fn moderation_flags(&self) -> ModerationFlags {
        ModerationFlags {
            pending: self.pending,
            approved: self.approved,
            verified: self.verified,
        }
    }
}

/// DTO for submitting a new project. Moderation flags are not part of the
/// DTO; every new project starts as `ModerationFlags::submitted()`.
#[derive(Debug)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub icon_url: Option<String>,
    pub category_slug: String,
    pub user_id: DbId,
}

/// DTO for editing a project. All fields are optional; moderation flags
/// cannot be edited this way.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub icon_url: Option<String>,
    pub category_slug: Option<String>,
}

//! Category entity model and DTOs.

use scout_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categories` table.
///
/// Projects reference categories by `slug`, not by foreign key; the api
/// layer blocks deleting a category that is still referenced.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a category. The slug is immutable (projects reference
/// it by value); only display fields can change.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

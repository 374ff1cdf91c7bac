//! Role lookup model.

use scout_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A role row from the `roles` table. Seeded with `admin` and `member`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of any name-only lookup table (categories, roles, hobbies, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CatalogEntryRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

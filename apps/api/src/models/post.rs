use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct PostRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: Option<String>,
    pub image_url: Option<Vec<String>>,
    pub location: Option<String>,
    pub mentions: Option<Vec<String>>,
    pub tag_ids: Option<Vec<String>>,
    pub tags_name: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

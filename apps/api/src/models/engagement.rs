use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The per-post engagement record tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EngagementKind {
    Like,
    Comment,
    Share,
    Favorite,
}

impl EngagementKind {
    pub fn table(&self) -> &'static str {
        match self {
            EngagementKind::Like => "post_likes",
            EngagementKind::Comment => "post_comments",
            EngagementKind::Share => "post_shares",
            EngagementKind::Favorite => "post_favorites",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CommentRow {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

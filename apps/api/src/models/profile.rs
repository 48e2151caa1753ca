use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Author snapshot attached to feed items.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub profile_picture_url: Option<String>,
    pub email: Option<String>,
}

/// Full account view used by login validation and account deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct AccountRow {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub profile_picture_url: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CompanyProfileRow {
    pub user_id: Uuid,
    /// Tag identifiers, stored either as a JSON array or a comma-separated string.
    pub tags_ids: Option<String>,
    /// Display names; not used for matching.
    pub tags: Option<String>,
}

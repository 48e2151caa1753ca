use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::post::PostRow;
use crate::validation::{clean_list, optional_text, require_uuid};

#[derive(Debug, Default, serde::Deserialize)]
pub struct CreatePostRequest {
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<Vec<String>>,
    pub location: Option<String>,
    pub mentions: Option<Vec<String>>,
    pub tag_ids: Option<Vec<String>>,
    pub tags_name: Option<Vec<String>>,
}

/// A validated post ready to insert.
#[derive(Debug, PartialEq)]
pub struct NewPost {
    pub user_id: Uuid,
    pub description: Option<String>,
    pub image_url: Vec<String>,
    pub location: Option<String>,
    pub mentions: Vec<String>,
    pub tag_ids: Vec<String>,
    pub tags_name: Vec<String>,
}

impl NewPost {
    /// A post needs an author and either text or at least one image.
    pub fn from_request(req: CreatePostRequest) -> Result<Self, AppError> {
        let user_id = require_uuid("user_id", req.user_id.as_deref())?;
        let description = optional_text(req.description);
        let image_url = clean_list(req.image_url);

        if description.is_none() && image_url.is_empty() {
            return Err(AppError::Validation(
                "A post needs a description or at least one image".to_string(),
            ));
        }

        Ok(NewPost {
            user_id,
            description,
            image_url,
            location: optional_text(req.location),
            mentions: clean_list(req.mentions),
            tag_ids: clean_list(req.tag_ids),
            tags_name: clean_list(req.tags_name),
        })
    }
}

pub async fn insert_post(pool: &PgPool, post: &NewPost) -> Result<PostRow, AppError> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts
            (user_id, description, image_url, location, mentions, tag_ids, tags_name)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, description, image_url, location, mentions,
                  tag_ids, tags_name, created_at, updated_at
        "#,
    )
    .bind(post.user_id)
    .bind(&post.description)
    .bind(&post.image_url)
    .bind(&post.location)
    .bind(&post.mentions)
    .bind(&post.tag_ids)
    .bind(&post.tags_name)
    .fetch_one(pool)
    .await?;

    info!("Created post {} for user {}", row.id, row.user_id);
    Ok(row)
}

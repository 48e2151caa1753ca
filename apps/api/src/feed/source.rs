//! Read-side queries the feed pipeline needs from the database.
//!
//! `AppState` carries an `Arc<dyn FeedSource>`; production wires in `PgStore`.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::db::PgStore;
use crate::models::engagement::EngagementKind;
use crate::models::job_request::{JobRequestRow, JobRequestStatus};
use crate::models::post::PostRow;
use crate::models::profile::{CompanyProfileRow, ProfileRow};

#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn company_profile(&self, user_id: Uuid) -> Result<Option<CompanyProfileRow>>;

    /// Every post, newest first.
    async fn posts(&self) -> Result<Vec<PostRow>>;

    /// Job requests with status `Approved`, newest first.
    async fn approved_job_requests(&self) -> Result<Vec<JobRequestRow>>;

    async fn profiles(&self, user_ids: &[Uuid]) -> Result<Vec<ProfileRow>>;

    /// Number of `kind` records per post, restricted to `post_ids`.
    /// Posts with no records are absent from the map.
    async fn engagement_counts(
        &self,
        kind: EngagementKind,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>>;
}

#[async_trait]
impl FeedSource for PgStore {
    async fn company_profile(&self, user_id: Uuid) -> Result<Option<CompanyProfileRow>> {
        Ok(sqlx::query_as::<_, CompanyProfileRow>(
            "SELECT user_id, tags_ids, tags FROM company_profiles WHERE user_id = $1 LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?)
    }

    async fn posts(&self) -> Result<Vec<PostRow>> {
        Ok(sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, user_id, description, image_url, location, mentions,
                   tag_ids, tags_name, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool())
        .await?)
    }

    async fn approved_job_requests(&self) -> Result<Vec<JobRequestRow>> {
        Ok(sqlx::query_as::<_, JobRequestRow>(
            "SELECT * FROM job_requests WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(JobRequestStatus::Approved.as_str())
        .fetch_all(self.pool())
        .await?)
    }

    async fn profiles(&self, user_ids: &[Uuid]) -> Result<Vec<ProfileRow>> {
        Ok(sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT user_id, full_name, username, profile_picture_url, email
            FROM profiles
            WHERE user_id = ANY($1)
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool())
        .await?)
    }

    async fn engagement_counts(
        &self,
        kind: EngagementKind,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>> {
        // Table name comes from a closed enum, never from input.
        let sql = format!(
            "SELECT post_id, COUNT(*) FROM {} WHERE post_id = ANY($1) GROUP BY post_id",
            kind.table()
        );
        let rows: Vec<(Uuid, i64)> = sqlx::query_as(&sql)
            .bind(post_ids)
            .fetch_all(self.pool())
            .await?;
        Ok(rows.into_iter().collect())
    }
}

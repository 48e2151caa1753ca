use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::db::PgStore;
use crate::models::engagement::{CommentRow, EngagementKind};

/// Write-side access to per-post engagement records.
#[async_trait]
pub trait EngagementStore: Send + Sync {
    async fn post_exists(&self, post_id: Uuid) -> Result<bool>;

    async fn has_record(&self, kind: EngagementKind, user_id: Uuid, post_id: Uuid) -> Result<bool>;

    /// Inserts a record; a concurrent duplicate is absorbed, not an error.
    async fn insert_record(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<()>;

    async fn delete_record(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<()>;

    async fn count_records(&self, kind: EngagementKind, post_id: Uuid) -> Result<i64>;

    async fn insert_comment(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        comment_text: &str,
    ) -> Result<CommentRow>;
}

#[async_trait]
impl EngagementStore for PgStore {
    async fn post_exists(&self, post_id: Uuid) -> Result<bool> {
        Ok(
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
                .bind(post_id)
                .fetch_one(self.pool())
                .await?,
        )
    }

    async fn has_record(&self, kind: EngagementKind, user_id: Uuid, post_id: Uuid) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE user_id = $1 AND post_id = $2)",
            kind.table()
        );
        Ok(sqlx::query_scalar(&sql)
            .bind(user_id)
            .bind(post_id)
            .fetch_one(self.pool())
            .await?)
    }

    async fn insert_record(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<()> {
        let sql = format!(
            "INSERT INTO {} (user_id, post_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, post_id) DO NOTHING",
            kind.table()
        );
        sqlx::query(&sql)
            .bind(user_id)
            .bind(post_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn delete_record(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE user_id = $1 AND post_id = $2", kind.table());
        sqlx::query(&sql)
            .bind(user_id)
            .bind(post_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn count_records(&self, kind: EngagementKind, post_id: Uuid) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE post_id = $1", kind.table());
        Ok(sqlx::query_scalar(&sql)
            .bind(post_id)
            .fetch_one(self.pool())
            .await?)
    }

    async fn insert_comment(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        comment_text: &str,
    ) -> Result<CommentRow> {
        Ok(sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO post_comments (user_id, post_id, comment_text)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, user_id, comment_text, created_at
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .bind(comment_text)
        .fetch_one(self.pool())
        .await?)
    }
}

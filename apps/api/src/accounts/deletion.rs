use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::engagement::EngagementKind;

const ENGAGEMENT_KINDS: [EngagementKind; 4] = [
    EngagementKind::Like,
    EngagementKind::Comment,
    EngagementKind::Share,
    EngagementKind::Favorite,
];

/// Removes everything a user owns and soft-deletes the profile, in one transaction.
///
/// Engagement rows are removed both where the user is the actor and where the
/// post being engaged with belongs to the user.
pub async fn delete_account(pool: &PgPool, user_id: Uuid) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let exists: Option<Uuid> =
        sqlx::query_scalar("SELECT user_id FROM profiles WHERE user_id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
    if exists.is_none() {
        return Err(AppError::NotFound(format!("Profile {user_id} not found")));
    }

    for kind in ENGAGEMENT_KINDS {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = $1 \
             OR post_id IN (SELECT id FROM posts WHERE user_id = $1)",
            kind.table()
        );
        sqlx::query(&sql).bind(user_id).execute(&mut *tx).await?;
    }

    for sql in [
        "DELETE FROM event_interests WHERE user_id = $1",
        "DELETE FROM posts WHERE user_id = $1",
        "DELETE FROM job_requests WHERE user_id = $1",
        "DELETE FROM company_profiles WHERE user_id = $1",
        "UPDATE profiles SET is_deleted = TRUE WHERE user_id = $1",
    ] {
        sqlx::query(sql).bind(user_id).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("Deleted account data for user {user_id}");
    Ok(())
}

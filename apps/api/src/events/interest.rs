use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::event::EventInterestRow;

#[derive(Debug)]
pub struct InterestOutcome {
    /// The row created by this call; `None` when the user had already marked the event.
    pub created: Option<EventInterestRow>,
}

impl InterestOutcome {
    pub fn already_marked(&self) -> bool {
        self.created.is_none()
    }
}

/// Records that `user_id` is interested in `event_id`. Repeating the call is a no-op.
pub async fn mark_interest(
    pool: &PgPool,
    user_id: Uuid,
    event_id: Uuid,
) -> Result<InterestOutcome, AppError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
        .bind(event_id)
        .fetch_one(pool)
        .await?;
    if !exists {
        return Err(AppError::NotFound(format!("Event {event_id} not found")));
    }

    let created = sqlx::query_as::<_, EventInterestRow>(
        r#"
        INSERT INTO event_interests (event_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (event_id, user_id) DO NOTHING
        RETURNING id, event_id, user_id, created_at
        "#,
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    if created.is_some() {
        info!("User {user_id} marked interest in event {event_id}");
    }

    Ok(InterestOutcome { created })
}

use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::engagement::store::EngagementStore;
use crate::errors::AppError;
use crate::models::engagement::{CommentRow, EngagementKind};

/// Engagement kinds that flip on and off. Comments accumulate instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    Like,
    Share,
    Favorite,
}

impl ToggleKind {
    pub fn engagement(self) -> EngagementKind {
        match self {
            ToggleKind::Like => EngagementKind::Like,
            ToggleKind::Share => EngagementKind::Share,
            ToggleKind::Favorite => EngagementKind::Favorite,
        }
    }

    /// Response field carrying the caller's new state, e.g. `liked`.
    pub fn state_field(self) -> &'static str {
        match self {
            ToggleKind::Like => "liked",
            ToggleKind::Share => "shared",
            ToggleKind::Favorite => "favorited",
        }
    }

    /// Response field carrying the post's new total, e.g. `total_likes`.
    pub fn total_field(self) -> &'static str {
        match self {
            ToggleKind::Like => "total_likes",
            ToggleKind::Share => "total_shares",
            ToggleKind::Favorite => "total_favorites",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub kind: ToggleKind,
    /// Whether the record exists after the toggle.
    pub active: bool,
    pub total: i64,
}

impl ToggleOutcome {
    pub fn to_json(self) -> Value {
        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(true));
        body.insert(self.kind.state_field().to_string(), Value::Bool(self.active));
        body.insert(self.kind.total_field().to_string(), Value::from(self.total));
        Value::Object(body)
    }
}

async fn ensure_post(store: &dyn EngagementStore, post_id: Uuid) -> Result<(), AppError> {
    if store.post_exists(post_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Post {post_id} not found")))
    }
}

/// Deletes the caller's record if present, inserts it otherwise.
pub async fn toggle(
    store: &dyn EngagementStore,
    kind: ToggleKind,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<ToggleOutcome, AppError> {
    ensure_post(store, post_id).await?;

    let engagement = kind.engagement();
    let active = if store.has_record(engagement, user_id, post_id).await? {
        store.delete_record(engagement, user_id, post_id).await?;
        false
    } else {
        store.insert_record(engagement, user_id, post_id).await?;
        true
    };
    let total = store.count_records(engagement, post_id).await?;

    info!(
        "User {user_id} {} post {post_id} ({} now {total})",
        if active { "set" } else { "cleared" },
        kind.total_field()
    );

    Ok(ToggleOutcome {
        kind,
        active,
        total,
    })
}

pub async fn add_comment(
    store: &dyn EngagementStore,
    user_id: Uuid,
    post_id: Uuid,
    comment_text: &str,
) -> Result<(CommentRow, i64), AppError> {
    ensure_post(store, post_id).await?;
    let comment = store.insert_comment(user_id, post_id, comment_text).await?;
    let total = store
        .count_records(EngagementKind::Comment, post_id)
        .await?;
    Ok((comment, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{post, MemoryStore};

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let store = MemoryStore::default();
        let p = post(100, &[]);
        store.add_post(p.clone());
        let user = Uuid::new_v4();

        let on = toggle(&store, ToggleKind::Like, user, p.id).await.unwrap();
        assert!(on.active);
        assert_eq!(on.total, 1);

        let off = toggle(&store, ToggleKind::Like, user, p.id).await.unwrap();
        assert!(!off.active);
        assert_eq!(off.total, 0);
    }

    #[tokio::test]
    async fn test_kinds_are_independent() {
        let store = MemoryStore::default();
        let p = post(100, &[]);
        store.add_post(p.clone());
        let user = Uuid::new_v4();

        toggle(&store, ToggleKind::Like, user, p.id).await.unwrap();
        let fav = toggle(&store, ToggleKind::Favorite, user, p.id).await.unwrap();
        assert!(fav.active);
        assert_eq!(fav.total, 1);
        assert_eq!(store.record_count(EngagementKind::Like, p.id), 1);
    }

    #[tokio::test]
    async fn test_toggle_unknown_post_is_not_found() {
        let store = MemoryStore::default();
        let err = toggle(&store, ToggleKind::Share, Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_comment_counts() {
        let store = MemoryStore::default();
        let p = post(100, &[]);
        store.add_post(p.clone());
        let (comment, total) = add_comment(&store, Uuid::new_v4(), p.id, "Great work")
            .await
            .unwrap();
        assert_eq!(comment.comment_text, "Great work");
        assert_eq!(total, 1);
    }

    #[test]
    fn test_outcome_json_uses_kind_fields() {
        let body = ToggleOutcome {
            kind: ToggleKind::Share,
            active: true,
            total: 4,
        }
        .to_json();
        assert_eq!(body["success"], true);
        assert_eq!(body["shared"], true);
        assert_eq!(body["total_shares"], 4);
    }
}

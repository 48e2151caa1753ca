use std::sync::Arc;

use sqlx::PgPool;

use crate::engagement::store::EngagementStore;
use crate::feed::source::FeedSource;
use crate::storage::ObjectStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub storage: ObjectStore,
    /// Read-side queries for the company feed. Default: `PgStore`.
    pub feed: Arc<dyn FeedSource>,
    pub engagement: Arc<dyn EngagementStore>,
}
